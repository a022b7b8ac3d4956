//! `PortfolioApp` — the top-level egui application state.
//!
//! This module declares the `PortfolioApp` struct, its constructor and the
//! `eframe::App` impl. Drawing is split across the sibling sub-modules:
//!
//! - `sidebar`    — profile header and section buttons
//! - `content`    — the scrollable slide area
//! - `navigation` — scroll tracking and click-to-scroll
//! - `layout`     — per-frame geometry capture

pub mod content;
pub mod layout;
pub mod navigation;
pub mod sidebar;

use std::collections::HashMap;

use eframe::egui;

use portfolio_viewer::config::ViewerConfig;
use portfolio_viewer::net::image::ImageLoader;
use portfolio_viewer::scroll::animator::ScrollAnimation;
use portfolio_viewer::scroll::watch::ViewportWatcher;
use portfolio_viewer::scroll::ScrollTracker;
use portfolio_viewer::slides::{BaseUrlError, SlideUrls};

use self::layout::FrameLayout;

// ─── Application state ───────────────────────────────────────────────────────

pub struct PortfolioApp {
    pub config: ViewerConfig,
    pub slide_urls: SlideUrls,
    // Scroll sync
    pub tracker: ScrollTracker,
    pub watcher: ViewportWatcher,
    /// Geometry captured while drawing the previous frame.
    pub frame_layout: FrameLayout,
    /// Id clicked this frame, resolved after the content is laid out.
    pub pending_nav: Option<String>,
    pub scroll_anim: Option<ScrollAnimation>,
    /// Largest valid scroll offset of the content area.
    pub max_scroll: f32,
    /// Distance from the panel top to the scroll area top (pinned header).
    pub content_inset: f32,
    // Image loading
    pub image_loader: ImageLoader,
    pub image_textures: HashMap<String, egui::TextureHandle>,
}

impl PortfolioApp {
    pub fn new(config: ViewerConfig) -> Result<Self, BaseUrlError> {
        let slide_urls = SlideUrls::new(&config.image_base_url)?;
        log::info!(
            "portfolio viewer starting (images from {}, {:?} tie-break)",
            config.image_base_url,
            config.match_policy
        );
        Ok(Self {
            slide_urls,
            tracker: ScrollTracker::new(&config),
            watcher: ViewportWatcher::new(),
            frame_layout: FrameLayout::default(),
            pending_nav: None,
            scroll_anim: None,
            max_scroll: 0.0,
            content_inset: 0.0,
            image_loader: ImageLoader::new(&config),
            image_textures: HashMap::new(),
            config,
        })
    }

    /// Turn freshly decoded images into textures.
    fn upload_textures(&mut self, ctx: &egui::Context) {
        self.image_loader.poll();
        if self.image_textures.len() == self.image_loader.loaded_count() {
            return;
        }
        for url in self.image_loader.loaded_urls() {
            if self.image_textures.contains_key(&url) {
                continue;
            }
            if let Some(data) = self.image_loader.get(&url) {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [data.width as usize, data.height as usize],
                    &data.rgba,
                );
                let tex = ctx.load_texture(
                    format!("slide_{}", url),
                    image,
                    egui::TextureOptions::LINEAR,
                );
                self.image_textures.insert(url, tex);
                self.watcher.mark_layout_changed();
            }
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.upload_textures(ctx);

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(280.0)
            .show(ctx, |ui| {
                self.draw_sidebar(ui);
            });

        let metrics = egui::CentralPanel::default()
            .show(ctx, |ui| self.draw_content(ui))
            .inner;

        self.sync_scroll(ctx, metrics);
    }
}
