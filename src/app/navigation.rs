//! Navigation methods for `PortfolioApp`.
//!
//! Covers click-to-scroll (`request_navigation`) and the per-frame scroll
//! synchronization (`sync_scroll`) that feeds viewport events to the
//! tracker and advances smooth-scroll animations.

use eframe::egui;

use portfolio_viewer::scroll::animator::ScrollAnimation;
use portfolio_viewer::scroll::navigate_to;
use portfolio_viewer::scroll::watch::ViewportMetrics;

use super::PortfolioApp;

impl PortfolioApp {
    /// Queue a smooth scroll to the section or sub-section `id`. Resolved
    /// once the current frame's layout is known.
    pub fn request_navigation(&mut self, id: &str) {
        self.pending_nav = Some(id.to_string());
    }

    /// Run after the content has been drawn for this frame.
    pub fn sync_scroll(&mut self, ctx: &egui::Context, metrics: ViewportMetrics) {
        // Image arrivals resize sections without a scroll, and are reported
        // as `Layout` events.
        if let Some(event) = self.watcher.observe(metrics) {
            log::trace!("{:?} at offset {:.0}", event, metrics.scroll_offset);
            // The sidebar was drawn before the tracker ran.
            if self.tracker.on_scroll(&self.frame_layout) {
                ctx.request_repaint();
            }
        }

        let now = ctx.input(|i| i.time);

        if let Some(id) = self.pending_nav.take() {
            if let Some(req) = navigate_to(&self.frame_layout, &id) {
                // Land the target just below the pinned header.
                let target = (metrics.scroll_offset + req.delta - self.content_inset)
                    .clamp(0.0, self.max_scroll);
                log::debug!(
                    "scrolling to {} ({:.0} -> {:.0})",
                    req.target,
                    metrics.scroll_offset,
                    target
                );
                if let Some(anim) = self.scroll_anim.as_mut() {
                    anim.retarget(target, now);
                } else {
                    self.scroll_anim = Some(ScrollAnimation::new(
                        metrics.scroll_offset,
                        target,
                        now,
                        self.config.smooth_scroll_duration.as_secs_f32(),
                    ));
                }
            }
        }

        if let Some(anim) = &self.scroll_anim {
            if anim.is_finished(now) {
                self.scroll_anim = None;
            } else {
                ctx.request_repaint();
            }
        }
    }
}
