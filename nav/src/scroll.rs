//! Moving the viewport: immediate smooth scrolls on the current page,
//! deferred scrolls that ride a route transition back to the home page.

#[cfg(feature = "web")]
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::GetUntracked;
use leptos::prelude::WithValue;
use leptos_router::NavigateOptions;

use crate::controller::NavContext;

/// Scroll to a named section, or queue the scroll behind a navigation to
/// the home page when the current page does not contain it.
///
/// Already sitting in the target section is a no-op, so repeated clicks on
/// the same item never jiggle the viewport.
pub(crate) fn scroll_or_defer(
    ctx: &NavContext,
    id: &'static str,
    navigate: &impl Fn(&str, NavigateOptions),
) {
    if ctx.active_section.get_untracked() == Some(id) {
        return;
    }
    if ctx.host.with_value(|host| host.scroll_to_id(id)) {
        return;
    }
    if ctx.on_home() {
        // the section is missing on its own page; nothing useful to do
        return;
    }
    ctx.navigate_to(&format!("/#{id}"), navigate);
}

/// One macrotask, so layout settles before a scroll or a measurement.
/// Resolves immediately off-browser.
pub(crate) async fn next_tick() {
    #[cfg(feature = "web")]
    TimeoutFuture::new(0).await;
}
