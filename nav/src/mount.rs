//! Mount-point aware URL handling.
//!
//! Each theme build of the site is served under its own URL prefix: the
//! default build at the domain root, the others at `/v6`, `/v12` and so on.
//! The components never concatenate URLs themselves; every link and every
//! route comparison goes through the [`MountContext`] of the running
//! instance.

/// The URL prefix this instance is served under, normalized to `""` for the
/// root mount or `/v6` (leading slash, no trailing slash) otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MountContext {
    base: &'static str,
}

impl MountContext {
    pub fn new(base: &'static str) -> Self {
        Self { base: normalize_base(base) }
    }

    /// Figure out the mount of the running instance: a compile-time override
    /// baked into the theme bundle wins, then the `<base href>` tag the
    /// deploy step injects, then the domain root.
    pub fn detect(compile_time: Option<&'static str>) -> Self {
        if let Some(base) = compile_time {
            return Self::new(base);
        }
        #[cfg(feature = "web")]
        if let Some(href) = document_base_href() {
            let path = path_of_href(&href);
            return Self::new(Box::leak(path.into_boxed_str()));
        }
        Self::new("")
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Concrete URL for a mount-independent path.
    ///
    /// `"/portfolio"` becomes `"/v6/portfolio"` on the `/v6` mount and stays
    /// `"/portfolio"` on the root mount. A bare fragment (`"#contact"` or
    /// `"/#contact"`) always lands on the home page of this mount.
    pub fn resolve(&self, logical: &str) -> String {
        let logical = logical.trim();
        if let Some(hash) = logical.strip_prefix('#') {
            return format!("{}/#{hash}", self.base);
        }
        let trimmed = logical.trim_start_matches('/');
        if trimmed.is_empty() {
            return format!("{}/", self.base);
        }
        let joined = trimmed
            .split('/')
            .filter(|seg| !seg.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/{joined}", self.base)
    }

    /// Whether a URL stays inside this instance. Anything scheme-qualified,
    /// protocol-relative, or under a *different* mount prefix is external
    /// and must be a full document navigation.
    pub fn is_internal(&self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }
        if url.starts_with('#') {
            return true;
        }
        if url.starts_with("//") || has_scheme(url) {
            return false;
        }
        if !url.starts_with('/') {
            // relative to the current document, so it cannot leave the mount
            return true;
        }
        match url.strip_prefix(self.base) {
            Some(rest) => {
                self.base.is_empty()
                    || rest.is_empty()
                    || rest.starts_with('/')
                    || rest.starts_with('#')
                    || rest.starts_with('?')
            }
            None => false,
        }
    }

    /// Strips the mount prefix off a browser pathname, yielding the path the
    /// route table understands. Pathnames that do not carry the prefix (a
    /// deployment mismatch) pass through unchanged.
    pub fn logical_path<'a>(&self, pathname: &'a str) -> &'a str {
        let rest = match pathname.strip_prefix(self.base) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => pathname,
        };
        if rest.is_empty() { "/" } else { rest }
    }

    pub fn is_home(&self, pathname: &str) -> bool {
        self.logical_path(pathname) == "/"
    }
}

fn normalize_base(raw: &'static str) -> &'static str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "";
    }
    if trimmed.starts_with('/') {
        trimmed
    } else {
        // one leak per process start, the mount never changes afterwards
        Box::leak(format!("/{trimmed}").into_boxed_str())
    }
}

/// `true` when the part before any `/`, `#` or `?` carries a scheme
/// (`https:`, `mailto:`, `tel:`, ...).
fn has_scheme(url: &str) -> bool {
    let head = match url.find(['/', '#', '?']) {
        Some(idx) => &url[..idx],
        None => url,
    };
    head.contains(':')
}

/// Path component of a (possibly absolute) `<base href>` value.
fn path_of_href(href: &str) -> String {
    let after_host = if let Some(idx) = href.find("://") {
        let tail = &href[idx + 3..];
        tail.find('/').map(|j| &tail[j..]).unwrap_or("/")
    } else if let Some(tail) = href.strip_prefix("//") {
        tail.find('/').map(|j| &tail[j..]).unwrap_or("/")
    } else {
        href
    };
    after_host
        .split(['?', '#'])
        .next()
        .unwrap_or("/")
        .to_string()
}

#[cfg(feature = "web")]
fn document_base_href() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let base = document.query_selector("base").ok().flatten()?;
    base.get_attribute("href").filter(|href| !href.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_spellings_normalize() {
        assert_eq!(MountContext::new("").base(), "");
        assert_eq!(MountContext::new("/").base(), "");
        assert_eq!(MountContext::new("/v6").base(), "/v6");
        assert_eq!(MountContext::new("/v6/").base(), "/v6");
        assert_eq!(MountContext::new("v6").base(), "/v6");
    }

    #[test]
    fn resolve_prefixes_the_mount() {
        let m = MountContext::new("/v6");
        assert_eq!(m.resolve("/portfolio"), "/v6/portfolio");
        assert_eq!(m.resolve("/portfolio/orbit-cms"), "/v6/portfolio/orbit-cms");
        assert_eq!(m.resolve("/"), "/v6/");
        assert_eq!(m.resolve(""), "/v6/");
    }

    #[test]
    fn resolve_on_the_root_mount_is_a_passthrough() {
        let m = MountContext::new("");
        assert_eq!(m.resolve("/portfolio"), "/portfolio");
        assert_eq!(m.resolve("/"), "/");
        assert_eq!(m.resolve("#contact"), "/#contact");
    }

    #[test]
    fn resolve_never_doubles_slashes() {
        for base in ["", "/", "/v6", "/v6/"] {
            let m = MountContext::new(base);
            for logical in ["/", "", "/portfolio", "portfolio", "//portfolio", "/portfolio//x"] {
                let url = m.resolve(logical);
                assert!(url.starts_with(m.base()), "{url}");
                assert!(!url.contains("//"), "{base} + {logical} -> {url}");
            }
        }
    }

    #[test]
    fn bare_fragments_land_on_the_home_page() {
        let m = MountContext::new("/v6");
        assert_eq!(m.resolve("#contact"), "/v6/#contact");
        assert_eq!(m.resolve("/#contact"), "/v6/#contact");
    }

    #[test]
    fn internal_means_same_mount_only() {
        let m = MountContext::new("/v6");
        assert!(m.is_internal("/v6"));
        assert!(m.is_internal("/v6/"));
        assert!(m.is_internal("/v6/portfolio"));
        assert!(m.is_internal("#contact"));
        assert!(!m.is_internal("/v12/portfolio"));
        assert!(!m.is_internal("/portfolio"));
        // prefix match respects the path boundary
        assert!(!m.is_internal("/v612"));
    }

    #[test]
    fn schemes_and_protocol_relative_urls_are_external() {
        let m = MountContext::new("");
        assert!(!m.is_internal("https://example.com/v6"));
        assert!(!m.is_internal("//example.com/v6"));
        assert!(!m.is_internal("mailto:mail@example.com"));
        assert!(!m.is_internal("tel:+4930123456"));
        assert!(m.is_internal("/portfolio"));
        assert!(m.is_internal("/anything/at/all"));
    }

    #[test]
    fn logical_path_strips_the_mount() {
        let m = MountContext::new("/v6");
        assert_eq!(m.logical_path("/v6"), "/");
        assert_eq!(m.logical_path("/v6/"), "/");
        assert_eq!(m.logical_path("/v6/portfolio/x"), "/portfolio/x");
        // boundary: /v612 is not under /v6
        assert_eq!(m.logical_path("/v612"), "/v612");
        // deployment mismatch passes through
        assert_eq!(m.logical_path("/other"), "/other");
    }

    #[test]
    fn is_home_sees_through_the_mount() {
        assert!(MountContext::new("/v6").is_home("/v6/"));
        assert!(MountContext::new("/v6").is_home("/v6"));
        assert!(!MountContext::new("/v6").is_home("/v6/portfolio"));
        assert!(MountContext::new("").is_home("/"));
    }

    #[test]
    fn base_href_paths_extract() {
        assert_eq!(path_of_href("https://folio.dev/v6/"), "/v6/");
        assert_eq!(path_of_href("https://folio.dev"), "/");
        assert_eq!(path_of_href("//folio.dev/v12/"), "/v12/");
        assert_eq!(path_of_href("/v6/"), "/v6/");
        assert_eq!(path_of_href("/v6/?cache=1"), "/v6/");
    }
}
