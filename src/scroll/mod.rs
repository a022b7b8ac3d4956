//! Scroll-synchronized navigation.
//!
//! The tracker never touches the rendering surface directly. Each frame the
//! surface hands it a [`LayoutQuery`] describing where every section and
//! sub-section marker currently sits relative to the viewport top, and the
//! tracker resolves which of them are "active":
//!
//! - section: the region containing the line at
//!   `section_trigger_ratio * viewport_height`
//! - sub-section: the marker inside that section containing the line at
//!   `sub_trigger_offset` pixels
//!
//! [`navigate_to`] is the inverse direction: given an id, how far to scroll
//! so the region's top lands on the viewport top.

pub mod animator;
pub mod watch;

use crate::config::ViewerConfig;
use crate::nav;

/// Vertical extent of a region in viewport coordinates (0 = viewport top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Half-open containment: `top <= y < bottom`.
    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        self.top <= y && y < self.bottom
    }
}

/// A rendered section or sub-section marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: String,
    pub span: Span,
}

impl Region {
    pub fn new(id: impl Into<String>, top: f32, bottom: f32) -> Self {
        Self {
            id: id.into(),
            span: Span::new(top, bottom),
        }
    }
}

/// Read-only view of the current layout.
pub trait LayoutQuery {
    fn viewport_height(&self) -> f32;

    /// Rendered top-level sections, in document order.
    fn sections(&self) -> &[Region];

    /// Sub-section markers rendered inside `section_id`, in document order.
    /// `None` when the section itself is not rendered.
    fn sub_markers(&self, section_id: &str) -> Option<&[Region]>;

    /// Span of a section, or of a sub-section marker, with the given id.
    fn locate(&self, id: &str) -> Option<Span> {
        if let Some(region) = self.sections().iter().find(|r| r.id == id) {
            return Some(region.span);
        }
        self.sections().iter().find_map(|section| {
            self.sub_markers(&section.id)?
                .iter()
                .find(|m| m.id == id)
                .map(|m| m.span)
        })
    }
}

/// Which region wins when more than one contains a trigger line.
///
/// `LastMatch` is the historical behavior: regions are scanned in document
/// order and each hit overwrites the previous one. It is probably not what a
/// scroll-spy wants (zero-height or overlapping regions make a later region
/// steal the highlight), so `FirstMatch` is offered as an explicit opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    #[default]
    LastMatch,
    FirstMatch,
}

impl MatchPolicy {
    pub fn pick<'a>(&self, regions: &'a [Region], y: f32) -> Option<&'a Region> {
        let mut hits = regions.iter().filter(|r| r.span.contains(y));
        match self {
            MatchPolicy::LastMatch => hits.last(),
            MatchPolicy::FirstMatch => hits.next(),
        }
    }
}

/// Highlight state read by the sidebar and sub-navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub active_section: String,
    pub active_sub_section: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: nav::first_section().to_string(),
            active_sub_section: None,
        }
    }
}

impl UiState {
    pub fn is_section_active(&self, id: &str) -> bool {
        self.active_section == id
    }

    pub fn is_sub_active(&self, id: &str) -> bool {
        self.active_sub_section.as_deref() == Some(id)
    }

    /// Navigation entry of the active section, whose heading and
    /// sub-navigation stay pinned above the content.
    pub fn active_entry(&self) -> Option<&'static nav::NavEntry> {
        nav::entry(&self.active_section)
    }
}

/// Resolves the active section/sub-section from layout geometry.
///
/// The tracker is the only writer of its [`UiState`].
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    state: UiState,
    section_trigger_ratio: f32,
    sub_trigger_offset: f32,
    policy: MatchPolicy,
}

impl ScrollTracker {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            state: UiState::default(),
            section_trigger_ratio: config.section_trigger_ratio,
            sub_trigger_offset: config.sub_trigger_offset,
            policy: config.match_policy,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Handle one scroll/resize event. Returns `true` if the state changed.
    pub fn on_scroll<L: LayoutQuery + ?Sized>(&mut self, layout: &L) -> bool {
        let section_trigger = self.section_trigger_ratio * layout.viewport_height();
        let resolved = self
            .policy
            .pick(layout.sections(), section_trigger)
            .map(|r| r.id.as_str());

        let sub = resolved.and_then(|section| self.resolve_sub(layout, section));

        let next = UiState {
            // No section on the trigger line keeps the previous one.
            active_section: resolved
                .map(str::to_string)
                .unwrap_or_else(|| self.state.active_section.clone()),
            active_sub_section: sub,
        };

        if next == self.state {
            return false;
        }
        log::debug!(
            "active: {} / {} (was {} / {})",
            next.active_section,
            next.active_sub_section.as_deref().unwrap_or("-"),
            self.state.active_section,
            self.state.active_sub_section.as_deref().unwrap_or("-"),
        );
        self.state = next;
        true
    }

    fn resolve_sub<L: LayoutQuery + ?Sized>(&self, layout: &L, section: &str) -> Option<String> {
        if nav::sub_ids_for(section).is_empty() {
            return None;
        }
        let markers = layout.sub_markers(section)?;
        self.policy
            .pick(markers, self.sub_trigger_offset)
            .map(|m| m.id.clone())
    }
}

/// A request to scroll the viewport by `delta` pixels (positive = down).
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub target: String,
    pub delta: f32,
}

/// Work out the scroll that brings the section or sub-section `id` to the
/// viewport top. `None` if nothing with that id is rendered.
pub fn navigate_to<L: LayoutQuery + ?Sized>(layout: &L, id: &str) -> Option<ScrollRequest> {
    let Some(span) = layout.locate(id) else {
        log::debug!("navigate_to({}): not rendered, ignoring", id);
        return None;
    };
    Some(ScrollRequest {
        target: id.to_string(),
        delta: span.top,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Synthetic layout for headless tests.
    #[derive(Default)]
    pub(crate) struct FakeLayout {
        pub viewport: f32,
        pub sections: Vec<Region>,
        pub subs: Vec<(String, Vec<Region>)>,
    }

    impl FakeLayout {
        pub fn new(viewport: f32) -> Self {
            Self {
                viewport,
                ..Default::default()
            }
        }

        pub fn section(mut self, id: &str, top: f32, bottom: f32) -> Self {
            self.sections.push(Region::new(id, top, bottom));
            self
        }

        pub fn sub(mut self, section: &str, id: &str, top: f32, bottom: f32) -> Self {
            let marker = Region::new(id, top, bottom);
            match self.subs.iter_mut().find(|(s, _)| s == section) {
                Some((_, list)) => list.push(marker),
                None => self.subs.push((section.to_string(), vec![marker])),
            }
            self
        }
    }

    impl LayoutQuery for FakeLayout {
        fn viewport_height(&self) -> f32 {
            self.viewport
        }

        fn sections(&self) -> &[Region] {
            &self.sections
        }

        fn sub_markers(&self, section_id: &str) -> Option<&[Region]> {
            if !self.sections.iter().any(|r| r.id == section_id) {
                return None;
            }
            Some(
                self.subs
                    .iter()
                    .find(|(s, _)| s == section_id)
                    .map(|(_, list)| list.as_slice())
                    .unwrap_or(&[]),
            )
        }
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(&ViewerConfig::default())
    }

    /// Viewport 1000px: section trigger at 300, sub trigger at 220.
    fn education_layout() -> FakeLayout {
        FakeLayout::new(1000.0)
            .section("biography", -2000.0, -800.0)
            .section("education", -800.0, 1600.0)
            .section("extracurricular", 1600.0, 3000.0)
            .sub("education", "education-main", -700.0, 100.0)
            .sub("education", "experience", 100.0, 1600.0)
    }

    #[test]
    fn initial_state() {
        let t = tracker();
        assert_eq!(t.state().active_section, "biography");
        assert_eq!(t.state().active_sub_section, None);
    }

    #[test]
    fn experience_on_trigger_line() {
        let mut t = tracker();
        assert!(t.on_scroll(&education_layout()));
        assert_eq!(t.state().active_section, "education");
        assert_eq!(t.state().active_sub_section.as_deref(), Some("experience"));
        assert!(t.state().is_sub_active("experience"));
        assert!(!t.state().is_sub_active("education-main"));
    }

    #[test]
    fn active_entry_lists_highlighted_sub() {
        let mut t = tracker();
        t.on_scroll(&education_layout());
        let entry = t.state().active_entry().unwrap();
        assert_eq!(entry.id, "education");
        let highlighted: Vec<_> = entry
            .sub_entries
            .iter()
            .filter(|s| t.state().is_sub_active(s.id))
            .map(|s| s.id)
            .collect();
        assert_eq!(highlighted, ["experience"]);
    }

    #[test]
    fn sub_cleared_when_no_marker_on_offset() {
        let mut t = tracker();
        t.on_scroll(&education_layout());
        assert!(t.state().active_sub_section.is_some());

        // Section still covers 300px, but the markers sit below 220px.
        let layout = FakeLayout::new(1000.0)
            .section("education", 0.0, 2000.0)
            .sub("education", "education-main", 250.0, 900.0)
            .sub("education", "experience", 900.0, 2000.0);
        assert!(t.on_scroll(&layout));
        assert_eq!(t.state().active_section, "education");
        assert_eq!(t.state().active_sub_section, None);
    }

    #[test]
    fn idempotent_on_unchanged_layout() {
        let mut t = tracker();
        let layout = education_layout();
        assert!(t.on_scroll(&layout));
        let first = t.state().clone();
        assert!(!t.on_scroll(&layout));
        assert_eq!(t.state(), &first);
    }

    #[test]
    fn resize_moves_section_trigger() {
        let mut t = tracker();
        let short = FakeLayout::new(1000.0)
            .section("biography", 0.0, 400.0)
            .section("hobbies", 400.0, 2000.0);
        t.on_scroll(&short);
        assert_eq!(t.state().active_section, "biography");

        // Same spans, taller viewport: the trigger moves from 300 to 600.
        let tall = FakeLayout {
            viewport: 2000.0,
            ..short
        };
        assert!(t.on_scroll(&tall));
        assert_eq!(t.state().active_section, "hobbies");
    }

    #[test]
    fn section_without_subs_clears_sub() {
        let mut t = tracker();
        t.on_scroll(&education_layout());
        let layout = FakeLayout::new(1000.0)
            .section("education", -3000.0, -200.0)
            .section("hobbies", -200.0, 900.0);
        t.on_scroll(&layout);
        assert_eq!(t.state().active_section, "hobbies");
        assert_eq!(t.state().active_sub_section, None);
    }

    #[test]
    fn no_section_on_trigger_retains_section() {
        let mut t = tracker();
        t.on_scroll(&education_layout());
        // Gap between sections straddles the 300px line.
        let layout = FakeLayout::new(1000.0)
            .section("education", -900.0, 250.0)
            .section("extracurricular", 350.0, 1900.0)
            .sub("education", "experience", 100.0, 250.0);
        t.on_scroll(&layout);
        assert_eq!(t.state().active_section, "education");
        assert_eq!(t.state().active_sub_section, None);
    }

    #[test]
    fn trigger_line_is_half_open() {
        let mut t = tracker();
        let layout = FakeLayout::new(1000.0)
            .section("biography", -500.0, 300.0)
            .section("hobbies", 300.0, 900.0);
        t.on_scroll(&layout);
        assert_eq!(t.state().active_section, "hobbies");
    }

    #[test]
    fn last_match_wins_on_overlap() {
        let mut t = tracker();
        let layout = FakeLayout::new(1000.0)
            .section("education", 0.0, 1000.0)
            .section("extracurricular", 200.0, 1200.0)
            .sub("extracurricular", "clubs", 0.0, 500.0)
            .sub("extracurricular", "volunteer", 200.0, 300.0);
        t.on_scroll(&layout);
        assert_eq!(t.state().active_section, "extracurricular");
        assert_eq!(t.state().active_sub_section.as_deref(), Some("volunteer"));
    }

    #[test]
    fn first_match_policy_on_overlap() {
        let cfg = ViewerConfig {
            match_policy: MatchPolicy::FirstMatch,
            ..Default::default()
        };
        let mut t = ScrollTracker::new(&cfg);
        let layout = FakeLayout::new(1000.0)
            .section("education", 0.0, 1000.0)
            .section("extracurricular", 200.0, 1200.0)
            .sub("education", "education-main", 0.0, 500.0)
            .sub("education", "experience", 200.0, 300.0);
        t.on_scroll(&layout);
        assert_eq!(t.state().active_section, "education");
        assert_eq!(t.state().active_sub_section.as_deref(), Some("education-main"));
    }

    #[test]
    fn zero_height_regions_never_match() {
        let layout = FakeLayout::new(1000.0).section("goals", 300.0, 300.0);
        assert!(MatchPolicy::LastMatch.pick(layout.sections(), 300.0).is_none());
    }

    #[test]
    fn markers_outside_active_section_are_ignored() {
        let mut t = tracker();
        let layout = FakeLayout::new(1000.0)
            .section("education", -100.0, 1000.0)
            .section("extracurricular", 1000.0, 2000.0)
            .sub("extracurricular", "clubs", 0.0, 500.0);
        t.on_scroll(&layout);
        assert_eq!(t.state().active_section, "education");
        assert_eq!(t.state().active_sub_section, None);
    }

    #[test]
    fn navigate_to_section_and_sub() {
        let layout = education_layout();
        let req = navigate_to(&layout, "extracurricular").unwrap();
        assert_eq!(req.delta, 1600.0);
        let req = navigate_to(&layout, "experience").unwrap();
        assert_eq!(req.target, "experience");
        assert_eq!(req.delta, 100.0);
    }

    #[test]
    fn navigate_to_missing_id_is_noop() {
        let mut t = tracker();
        let layout = education_layout();
        t.on_scroll(&layout);
        let before = t.state().clone();
        assert!(navigate_to(&layout, "nonexistent").is_none());
        assert_eq!(t.state(), &before);
    }
}
