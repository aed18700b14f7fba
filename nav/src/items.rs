//! Static navigation data a theme hands to [`crate::provide_nav`].

use crate::spy::ScrollSpyConfig;

/// Where a navigation item points.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavTarget {
    /// A named region of the home page, reached by scrolling.
    Section(&'static str),
    /// A logical route inside this instance, reached by the router.
    Route(&'static str),
}

/// One entry of a theme's navigation. The set is fixed for the lifetime of
/// the app; only which entry is *active* changes at runtime.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavItem {
    /// Stable identifier, also the translation key suffix for the label.
    pub key: &'static str,
    pub target: NavTarget,
}

impl NavItem {
    pub const fn section(key: &'static str, id: &'static str) -> Self {
        Self { key, target: NavTarget::Section(id) }
    }

    pub const fn route(key: &'static str, path: &'static str) -> Self {
        Self { key, target: NavTarget::Route(path) }
    }

    /// The mount-independent path this item links to. Feed it through
    /// [`crate::MountContext::resolve`] before it lands in an `href`.
    pub fn logical_href(&self) -> String {
        match self.target {
            NavTarget::Section(id) => format!("/#{id}"),
            NavTarget::Route(path) => path.to_string(),
        }
    }
}

/// Everything about navigation a theme is allowed to vary.
#[derive(Clone, Copy, Debug)]
pub struct NavConfig {
    pub items: &'static [NavItem],
    pub spy: ScrollSpyConfig,
    /// Scroll depth in px past which the header switches to its condensed
    /// "scrolled" styling.
    pub scrolled_after_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            items: &[],
            spy: ScrollSpyConfig::default(),
            scrolled_after_px: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_items_link_to_home_anchors() {
        let item = NavItem::section("contact", "contact");
        assert_eq!(item.logical_href(), "/#contact");
    }

    #[test]
    fn route_items_link_to_their_path() {
        let item = NavItem::route("portfolio", "/portfolio");
        assert_eq!(item.logical_href(), "/portfolio");
    }
}
