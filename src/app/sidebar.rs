//! Sidebar rendering for `PortfolioApp`.
//!
//! Draws the profile header and one button per top-level section. The
//! button of the active section is highlighted; clicking a button queues a
//! smooth scroll to that section.

use eframe::egui;
use portfolio_viewer::nav::{NAV_ENTRIES, PROFILE};

use crate::ui::nav_button;

use super::PortfolioApp;

impl PortfolioApp {
    /// Render the left navigation panel.
    pub fn draw_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(PROFILE.title).size(26.0).strong());
            ui.label(egui::RichText::new(PROFILE.subtitle).size(13.0).weak());
        });
        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        let mut clicked = None;
        for entry in NAV_ENTRIES {
            let active = self.tracker.state().is_section_active(entry.id);
            if nav_button(ui, entry.icon, entry.label, active).clicked() {
                clicked = Some(entry.id);
            }
            ui.add_space(4.0);
        }

        if let Some(id) = clicked {
            self.request_navigation(id);
        }
    }
}
