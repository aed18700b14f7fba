//! Shared navigation core for the themed portfolio builds.
//!
//! Every theme bundle is served under its own URL prefix (the domain root,
//! `/v6`, `/v12`, ...) yet follows one interaction contract: mount-aware
//! link resolution, scroll-spied section highlighting, smooth scrolling
//! that survives page changes, and a scroll-locking fullscreen menu. The
//! differences between themes are data ([`NavConfig`]), not code.
//!
//! A theme wires itself up in three calls:
//!
//! ```ignore
//! let mount = MountContext::detect(option_env!("BASE_PATH"));
//! // inside the router:
//! let nav = provide_nav(mount, theme_config());
//! // on the page that owns the sections:
//! track_sections();
//! ```

pub mod controller;
pub mod host;
pub mod items;
pub mod mount;
pub mod overlay;
pub mod scroll;
pub mod sections;
pub mod spy;

pub use controller::{NavContext, is_item_active, provide_nav, provide_nav_with_host, use_nav};
#[cfg(feature = "web")]
pub use host::DomHost;
pub use host::{FakeHost, NavHost};
pub use items::{NavConfig, NavItem, NavTarget};
pub use mount::MountContext;
pub use overlay::{ITEM_STAGGER_MS, OverlayMenu, entrance_delay_ms};
pub use sections::{Section, SectionSpy, track_sections};
pub use spy::{ScrollSpyConfig, SpyEngine, SpyStrategy};
