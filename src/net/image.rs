//! Asynchronous slide image fetcher.
//!
//! Spawns background threads to download images and decode them
//! into RGBA pixel buffers ready for egui texture creation. Each URL is
//! fetched at most once; failures are remembered and never retried.

use std::collections::{HashMap, HashSet};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use crate::config::ViewerConfig;

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Load state of a single URL.
pub enum ImageStatus<'a> {
    NotRequested,
    Pending,
    Loaded(&'a ImageData),
    Failed,
}

/// Raw-bytes fetch function run on the worker thread.
pub type FetchFn = Arc<dyn Fn(&str) -> Result<Vec<u8>, ImageError> + Send + Sync>;

/// Manages background image fetching and decoding.
pub struct ImageLoader {
    pending: HashMap<String, mpsc::Receiver<Result<ImageData, ImageError>>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
    fetch: FetchFn,
    max_width: u32,
}

impl ImageLoader {
    pub fn new(config: &ViewerConfig) -> Self {
        let timeout = config.fetch_timeout;
        Self::with_fetcher(
            config.max_image_width,
            Arc::new(move |url: &str| http_get(url, timeout)),
        )
    }

    /// Loader with a custom byte source.
    pub fn with_fetcher(max_width: u32, fetch: FetchFn) -> Self {
        Self {
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
            fetch,
            max_width,
        }
    }

    /// Request an image to be fetched in the background.
    pub fn request(&mut self, url: &str) {
        if self.loaded.contains_key(url)
            || self.pending.contains_key(url)
            || self.failed.contains(url)
        {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let url_owned = url.to_string();
        let fetch = Arc::clone(&self.fetch);
        let max_width = self.max_width;

        log::debug!("fetching {}", url);
        std::thread::spawn(move || {
            let result = fetch(&url_owned).and_then(|bytes| decode(&bytes, max_width));
            let _ = tx.send(result);
        });

        self.pending.insert(url.to_string(), rx);
    }

    /// Poll for completed downloads. Call every frame. Returns the number
    /// of downloads that finished (successfully or not).
    pub fn poll(&mut self) -> usize {
        let mut completed = Vec::new();
        for (url, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Ok(data)) => {
                    self.loaded.insert(url.clone(), data);
                    completed.push(url.clone());
                }
                Ok(Err(e)) => {
                    log::warn!("image {} failed: {}", url, e);
                    self.failed.insert(url.clone());
                    completed.push(url.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::warn!("image {} worker exited without a result", url);
                    self.failed.insert(url.clone());
                    completed.push(url.clone());
                }
            }
        }
        for url in &completed {
            self.pending.remove(url);
        }
        completed.len()
    }

    pub fn status(&self, url: &str) -> ImageStatus<'_> {
        if let Some(data) = self.loaded.get(url) {
            ImageStatus::Loaded(data)
        } else if self.pending.contains_key(url) {
            ImageStatus::Pending
        } else if self.failed.contains(url) {
            ImageStatus::Failed
        } else {
            ImageStatus::NotRequested
        }
    }

    /// Get a loaded image's data.
    pub fn get(&self, url: &str) -> Option<&ImageData> {
        self.loaded.get(url)
    }

    /// Get all loaded image URLs.
    pub fn loaded_urls(&self) -> Vec<String> {
        self.loaded.keys().cloned().collect()
    }

    /// Number of successfully loaded images.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    /// Number of images still being fetched.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

fn http_get(url: &str, timeout: Duration) -> Result<Vec<u8>, ImageError> {
    let resp = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(ImageError::Client)?
        .get(url)
        .send()
        .map_err(ImageError::Request)?;

    if !resp.status().is_success() {
        return Err(ImageError::Status(resp.status().as_u16()));
    }

    let bytes = resp.bytes().map_err(ImageError::Body)?;
    Ok(bytes.to_vec())
}

/// Decode image bytes, downscaling anything wider than `max_width`.
pub fn decode(bytes: &[u8], max_width: u32) -> Result<ImageData, ImageError> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if max_width > 0 && w > max_width {
        let ratio = max_width as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            max_width,
            new_h,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Ok(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}
