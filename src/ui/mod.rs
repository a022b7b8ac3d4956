//! Generic egui helpers shared by the sidebar and the content area.

use eframe::egui;
use portfolio_viewer::nav::NavEntry;
use portfolio_viewer::scroll::UiState;

/// Height of the pinned header band above the scroll area. Fixed so that
/// switching sections never resizes the scroll viewport.
pub const PINNED_HEADER_HEIGHT: f32 = 96.0;

/// Aspect ratio used for slides whose image has not arrived.
const PLACEHOLDER_ASPECT: f32 = 9.0 / 16.0;

/// Size of a `[w, h]` texture scaled to `width`, keeping its aspect ratio.
pub fn fitted_size(texture_size: [usize; 2], width: f32) -> egui::Vec2 {
    let [w, h] = texture_size;
    if w == 0 {
        return egui::vec2(width, width * PLACEHOLDER_ASPECT);
    }
    egui::vec2(width, width * h as f32 / w as f32)
}

/// Large section heading.
pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(16.0);
    ui.heading(egui::RichText::new(title).size(28.0).strong());
    ui.add_space(12.0);
}

/// Grey box standing in for a slide image. `broken` switches the
/// loading spinner for a broken-image marker.
pub fn slide_placeholder(ui: &mut egui::Ui, width: f32, alt: &str, broken: bool) {
    let size = egui::vec2(width, width * PLACEHOLDER_ASPECT);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, ui.visuals().faint_bg_color);

    let label = if broken {
        format!("\u{26A0} {}", alt)
    } else {
        alt.to_string()
    };
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(16.0),
        ui.visuals().weak_text_color(),
    );
    if !broken {
        ui.ctx().request_repaint_after(std::time::Duration::from_millis(250));
    }
}

/// Heading and sub-navigation of the active section, pinned above the
/// slides. Returns the band's response and the sub-section id clicked, if
/// any. Sections drawn without a header leave the band empty.
pub fn pinned_header(
    ui: &mut egui::Ui,
    entry: Option<&'static NavEntry>,
    state: &UiState,
) -> (egui::Response, Option<&'static str>) {
    let mut clicked = None;
    let size = egui::vec2(ui.available_width(), PINNED_HEADER_HEIGHT);
    let response = ui
        .allocate_ui(size, |ui| {
            ui.set_min_size(size);
            let Some(entry) = entry.filter(|e| e.shows_header || e.has_sub_sections()) else {
                return;
            };
            ui.add_space(12.0);
            ui.heading(egui::RichText::new(entry.title).size(26.0).strong());
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;
                for sub in entry.sub_entries {
                    let text = egui::RichText::new(sub.label).size(15.0);
                    if ui.selectable_label(state.is_sub_active(sub.id), text).clicked() {
                        clicked = Some(sub.id);
                    }
                }
            });
        })
        .response;
    (response, clicked)
}

/// Full-width navigation button; `active` draws it highlighted.
pub fn nav_button(ui: &mut egui::Ui, icon: &str, label: &str, active: bool) -> egui::Response {
    let text = egui::RichText::new(format!("{}  {}", icon, label)).size(15.0);
    let text = if active { text.strong() } else { text };
    ui.add_sized(
        [ui.available_width(), 34.0],
        egui::SelectableLabel::new(active, text),
    )
}
