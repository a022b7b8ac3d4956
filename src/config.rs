//! Viewer configuration.
//!
//! All knobs have compiled-in defaults; override individual fields with
//! struct-update syntax.

use std::time::Duration;

use crate::scroll::MatchPolicy;

/// Base URL every slide image is resolved against.
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/gsanan/port-image2/main/Saved%20Pictures/";

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Section trigger line, as a fraction of the viewport height.
    pub section_trigger_ratio: f32,
    /// Sub-section trigger line, in pixels from the viewport top.
    pub sub_trigger_offset: f32,
    /// Which candidate wins when several regions contain a trigger line.
    pub match_policy: MatchPolicy,
    pub image_base_url: String,
    /// Images wider than this are downscaled after decoding.
    pub max_image_width: u32,
    pub fetch_timeout: Duration,
    pub smooth_scroll_duration: Duration,
    pub window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            section_trigger_ratio: 0.3,
            sub_trigger_offset: 220.0,
            match_policy: MatchPolicy::LastMatch,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            max_image_width: 800,
            fetch_timeout: Duration::from_secs(10),
            smooth_scroll_duration: Duration::from_millis(450),
            window_size: [1280.0, 800.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_trigger_geometry() {
        let cfg = ViewerConfig::default();
        assert!((cfg.section_trigger_ratio - 0.3).abs() < f32::EPSILON);
        assert_eq!(cfg.sub_trigger_offset, 220.0);
        assert_eq!(cfg.match_policy, MatchPolicy::LastMatch);
        assert!(cfg.image_base_url.ends_with('/'));
    }

    #[test]
    fn struct_update_overrides() {
        let cfg = ViewerConfig {
            match_policy: MatchPolicy::FirstMatch,
            sub_trigger_offset: 100.0,
            max_image_width: 640,
            ..Default::default()
        };
        assert_eq!(cfg.match_policy, MatchPolicy::FirstMatch);
        assert_eq!(cfg.sub_trigger_offset, 100.0);
        assert_eq!(cfg.max_image_width, 640);
    }
}
