//! Per-frame layout capture.
//!
//! While the content area is drawn, every section and sub-section marker
//! reports its screen rect to a `LayoutRecorder`. Once the scroll area knows
//! its viewport, the recorder is converted into a `FrameLayout` in viewport
//! coordinates, which is what the scroll tracker and click navigation query.

use std::collections::HashMap;

use eframe::egui;
use portfolio_viewer::scroll::{LayoutQuery, Region};

#[derive(Default)]
pub struct LayoutRecorder {
    sections: Vec<(String, egui::Rect)>,
    subs: Vec<(String, String, egui::Rect)>,
}

impl LayoutRecorder {
    pub fn section(&mut self, id: &str, rect: egui::Rect) {
        self.sections.push((id.to_string(), rect));
    }

    pub fn sub(&mut self, section: &str, id: &str, rect: egui::Rect) {
        self.subs.push((section.to_string(), id.to_string(), rect));
    }

    /// Convert screen rects into spans relative to `viewport`'s top edge.
    pub fn finish(self, viewport: egui::Rect) -> FrameLayout {
        let top = viewport.top();
        let sections = self
            .sections
            .into_iter()
            .map(|(id, r)| Region::new(id, r.top() - top, r.bottom() - top))
            .collect();
        let mut subs: HashMap<String, Vec<Region>> = HashMap::new();
        for (section, id, r) in self.subs {
            subs.entry(section)
                .or_default()
                .push(Region::new(id, r.top() - top, r.bottom() - top));
        }
        FrameLayout {
            viewport_height: viewport.height(),
            sections,
            subs,
        }
    }
}

/// Geometry of the last drawn frame.
#[derive(Debug, Default)]
pub struct FrameLayout {
    viewport_height: f32,
    sections: Vec<Region>,
    subs: HashMap<String, Vec<Region>>,
}

impl LayoutQuery for FrameLayout {
    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn sections(&self) -> &[Region] {
        &self.sections
    }

    fn sub_markers(&self, section_id: &str) -> Option<&[Region]> {
        if !self.sections.iter().any(|r| r.id == section_id) {
            return None;
        }
        Some(self.subs.get(section_id).map(Vec::as_slice).unwrap_or(&[]))
    }
}
