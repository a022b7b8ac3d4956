//! Slide registry: which slides belong to which section, and where each
//! slide image lives.

use url::Url;

use crate::config::DEFAULT_IMAGE_BASE_URL;

/// Slide numbers per slide-owning id, in display order.
const SLIDE_MAPPING: &[(&str, &[u32])] = &[
    ("biography", &[1]),
    ("education-main", &[2, 3, 4, 5, 6]),
    ("experience", &[7, 8, 9, 10]),
    ("clubs", &[11, 12, 13, 14, 15, 16, 17]),
    ("volunteer", &[18, 19, 20, 21, 22]),
    ("hobbies", &[23, 24, 25]),
    ("goals", &[26]),
];

/// Slides configured for a section or sub-section. Unmapped ids yield an
/// empty slice.
pub fn slides_for(id: &str) -> &'static [u32] {
    SLIDE_MAPPING
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, slides)| *slides)
        .unwrap_or(&[])
}

/// Image URL of slide `n` on the default content host.
pub fn url_for(n: u32) -> String {
    format!("{}{}", DEFAULT_IMAGE_BASE_URL, file_name(n))
}

fn file_name(n: u32) -> String {
    format!("Slide%20{}.jpg", n)
}

/// Alt text shown while a slide is loading or when it failed to load.
pub fn alt_text(n: u32) -> String {
    format!("Slide {}", n)
}

/// Error returned for an unusable image base URL.
#[derive(Debug, thiserror::Error)]
#[error("invalid image base URL `{base}`: {source}")]
pub struct BaseUrlError {
    base: String,
    #[source]
    source: url::ParseError,
}

/// Slide URL builder bound to a configurable content host.
#[derive(Debug, Clone)]
pub struct SlideUrls {
    base: Url,
}

impl SlideUrls {
    pub fn new(base: &str) -> Result<Self, BaseUrlError> {
        // A base without a trailing slash would have its last segment
        // replaced by `join`.
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let base = Url::parse(&normalized).map_err(|source| BaseUrlError {
            base: base.to_string(),
            source,
        })?;
        Ok(Self { base })
    }

    pub fn url_for(&self, n: u32) -> String {
        match self.base.join(&file_name(n)) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.base, file_name(n)),
        }
    }
}
