//! Content-area rendering for `PortfolioApp`.
//!
//! Contains three methods:
//!
//! - `draw_content`  — pinned header of the active section, then the scroll
//!                     area holding every section in order
//! - `draw_section`  — one section: heading and slides
//! - `draw_slides`   — the slide images of one section or sub-section

use eframe::egui;

use portfolio_viewer::nav::{NavEntry, NAV_ENTRIES};
use portfolio_viewer::net::image::ImageStatus;
use portfolio_viewer::scroll::watch::ViewportMetrics;
use portfolio_viewer::slides::{alt_text, slides_for};

use crate::ui::{fitted_size, pinned_header, section_heading, slide_placeholder};

use super::layout::LayoutRecorder;
use super::PortfolioApp;

/// Slides never grow wider than this.
const MAX_SLIDE_WIDTH: f32 = 960.0;

impl PortfolioApp {
    /// Render the central content panel and report where its viewport is.
    pub fn draw_content(&mut self, ui: &mut egui::Ui) -> ViewportMetrics {
        let now = ui.input(|i| i.time);

        // Wheel or scrollbar input supersedes an in-flight smooth scroll.
        if self.scroll_anim.is_some()
            && ui.input(|i| i.smooth_scroll_delta.y != 0.0 || i.pointer.is_decidedly_dragging())
        {
            log::debug!("smooth scroll interrupted by user input");
            self.scroll_anim = None;
        }

        // Trigger lines are measured from the panel top, which the pinned
        // header overlaps, like a sticky header over the page.
        let panel_top = ui.cursor().top();
        let state = self.tracker.state();
        let (_, clicked) = pinned_header(ui, state.active_entry(), state);
        ui.separator();

        let mut area = egui::ScrollArea::vertical()
            .id_salt("slides")
            .auto_shrink([false, false]);
        if let Some(anim) = &self.scroll_anim {
            area = area.vertical_scroll_offset(anim.offset_at(now));
        }

        let mut recorder = LayoutRecorder::default();

        let output = area.show(ui, |ui| {
            // Sections must be contiguous so a trigger line never falls
            // into spacing between them.
            ui.spacing_mut().item_spacing.y = 0.0;
            let width = ui.available_width().min(MAX_SLIDE_WIDTH);
            for entry in NAV_ENTRIES {
                let rect = ui
                    .vertical(|ui| self.draw_section(ui, entry, width, &mut recorder))
                    .response
                    .rect;
                recorder.section(entry.id, rect);
            }
        });

        let viewport = egui::Rect::from_min_max(
            egui::pos2(output.inner_rect.left(), panel_top),
            output.inner_rect.max,
        );
        self.frame_layout = recorder.finish(viewport);
        self.content_inset = output.inner_rect.top() - panel_top;
        self.max_scroll = (output.content_size.y - output.inner_rect.height()).max(0.0);

        if let Some(id) = clicked {
            self.request_navigation(id);
        }

        ViewportMetrics {
            scroll_offset: output.state.offset.y,
            height: viewport.height(),
        }
    }

    fn draw_section(
        &mut self,
        ui: &mut egui::Ui,
        entry: &'static NavEntry,
        width: f32,
        recorder: &mut LayoutRecorder,
    ) {
        if entry.has_sub_sections() {
            section_heading(ui, entry.title);
            for sub in entry.sub_entries {
                let rect = ui.vertical(|ui| self.draw_slides(ui, sub.id, width)).response.rect;
                recorder.sub(entry.id, sub.id, rect);
            }
        } else {
            if entry.shows_header {
                section_heading(ui, entry.title);
            }
            self.draw_slides(ui, entry.id, width);
        }
        ui.add_space(24.0);
    }

    fn draw_slides(&mut self, ui: &mut egui::Ui, id: &str, width: f32) {
        for &n in slides_for(id) {
            let url = self.slide_urls.url_for(n);
            self.image_loader.request(&url);

            match self.image_textures.get(&url) {
                Some(tex) => {
                    let size = fitted_size(tex.size(), width);
                    ui.add(egui::Image::from_texture((tex.id(), size)));
                }
                None => {
                    let broken = matches!(self.image_loader.status(&url), ImageStatus::Failed);
                    slide_placeholder(ui, width, &alt_text(n), broken);
                }
            }
            ui.add_space(12.0);
        }
    }
}
