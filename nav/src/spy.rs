//! Scroll-spy: decides which home-page section counts as "where the reader
//! is" from a stream of viewport-intersection events.
//!
//! The engine itself never touches the DOM. `sections.rs` feeds it
//! per-section observations and it answers with the active section id,
//! which keeps every tie-break rule testable off-browser.

/// How the engine breaks ties when several sections are visible at once.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpyStrategy {
    /// The visible section whose top edge sits closest to the viewport top
    /// wins; equal distances go to the section registered earlier. Stable
    /// while scrolling across section boundaries.
    NearestTop,
    /// The most recently intersecting section wins. Cheaper, but can
    /// flicker when short sections enter and leave quickly.
    FirstIntersect,
}

/// Per-theme observer tuning.
#[derive(Clone, Copy, Debug)]
pub struct ScrollSpyConfig {
    /// CSS `rootMargin` applied to the observation viewport, e.g.
    /// `"-72px 0px -40% 0px"` to ignore the area behind a fixed header.
    pub root_margin: &'static str,
    /// Fraction of a section that must be visible before it competes in
    /// nearest-top ranking. Also fed into the observer's threshold ladder,
    /// so reports arrive right when a section crosses it.
    pub min_ratio: f64,
    pub strategy: SpyStrategy,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            root_margin: "0px",
            min_ratio: 0.0,
            strategy: SpyStrategy::NearestTop,
        }
    }
}

/// Latest observation for one section.
#[derive(Clone, Copy, Debug)]
struct Observation {
    intersecting: bool,
    ratio: f64,
    /// `boundingClientRect.top` of the section, px relative to the
    /// viewport top. Negative while the section straddles the top edge.
    top: f64,
}

/// The pure tracking state machine. Inactive until sections register;
/// events for unknown ids are ignored.
#[derive(Debug)]
pub struct SpyEngine {
    config: ScrollSpyConfig,
    sections: Vec<(&'static str, Option<Observation>)>,
    active: Option<&'static str>,
}

impl SpyEngine {
    pub fn new(config: ScrollSpyConfig) -> Self {
        Self { config, sections: Vec::new(), active: None }
    }

    /// Adds a section in document order. Registering the same id twice is a
    /// no-op, so remounting components is harmless.
    pub fn register(&mut self, id: &'static str) {
        if !self.sections.iter().any(|(sid, _)| *sid == id) {
            self.sections.push((id, None));
        }
    }

    pub fn deregister(&mut self, id: &str) {
        self.sections.retain(|(sid, _)| *sid != id);
        if self.active.is_some_and(|active| active == id) {
            self.active = None;
            self.recompute();
        }
    }

    /// Drops every section and the active highlight. Used on page teardown.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.active = None;
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    /// Feed one visibility change and get the (possibly unchanged) active
    /// section back.
    pub fn observe(
        &mut self,
        id: &str,
        intersecting: bool,
        ratio: f64,
        top: f64,
    ) -> Option<&'static str> {
        let Some(slot) = self.sections.iter_mut().find(|(sid, _)| *sid == id) else {
            return self.active;
        };
        let key = slot.0;
        slot.1 = Some(Observation { intersecting, ratio, top });
        match self.config.strategy {
            // latest intersecting report wins outright; leave events are
            // ignored so the highlight never clears mid-page
            SpyStrategy::FirstIntersect => {
                if intersecting {
                    self.active = Some(key);
                }
            }
            SpyStrategy::NearestTop => self.recompute(),
        }
        self.active
    }

    fn recompute(&mut self) {
        let mut best: Option<(&'static str, f64)> = None;
        for &(id, observation) in &self.sections {
            let Some(o) = observation else { continue };
            if !o.intersecting || o.ratio < self.config.min_ratio {
                continue;
            }
            // distance between the viewport top and the section's *visible*
            // top edge; a section straddling the top scores zero
            let distance = o.top.max(0.0);
            match best {
                Some((_, current)) if current <= distance => {}
                _ => best = Some((id, distance)),
            }
        }
        if let Some((id, _)) = best {
            self.active = Some(id);
        }
        // nothing visible: the previous winner stays, so the gap between
        // two sections never blanks the highlight
    }
}
