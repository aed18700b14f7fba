pub mod header;
pub mod overlay;
