pub mod home;
pub mod portfolio;
