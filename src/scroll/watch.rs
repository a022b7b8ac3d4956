//! Viewport change detection.
//!
//! An immediate-mode UI has no scroll callback, so scroll and resize events
//! are derived by comparing each frame's viewport metrics with the last
//! frame's.

/// Scroll offset and size of the scrolling viewport for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_offset: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    /// First frame with a laid-out viewport.
    Initial,
    Scroll,
    Resize,
    /// Content moved under a still viewport (e.g. an image arrived).
    Layout,
}

/// Sub-pixel jitter below this is not a scroll.
const EPSILON: f32 = 0.5;

#[derive(Debug, Default)]
pub struct ViewportWatcher {
    last: Option<ViewportMetrics>,
    layout_changed: bool,
}

impl ViewportWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a `Layout` event on the next `observe` even if the viewport
    /// itself did not move.
    pub fn mark_layout_changed(&mut self) {
        self.layout_changed = true;
    }

    /// Record this frame's metrics and report what changed, if anything.
    /// A frame that both scrolled and resized reports `Resize`.
    pub fn observe(&mut self, metrics: ViewportMetrics) -> Option<ViewportEvent> {
        let prev = self.last.replace(metrics);
        let layout_changed = std::mem::take(&mut self.layout_changed);
        let Some(prev) = prev else {
            return Some(ViewportEvent::Initial);
        };
        if (prev.height - metrics.height).abs() > EPSILON {
            Some(ViewportEvent::Resize)
        } else if (prev.scroll_offset - metrics.scroll_offset).abs() > EPSILON {
            Some(ViewportEvent::Scroll)
        } else if layout_changed {
            Some(ViewportEvent::Layout)
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<ViewportMetrics> {
        self.last
    }
}
