use std::sync::Arc;

use ndarray::{Array2, Array3};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cache::ImageCache;
use crate::config::DisplayConfig;
use crate::consts::{DEGENERATE_RANGE_PAD, INSUFFICIENT_FRAMES_WARNING};
use crate::roi::{Roi, RoiId};

/// A resolved thumbnail ready for display.
/// Pixel data is row-major, shape = (height, width).
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayImage {
    pub data: Array2<f32>,
}

impl DisplayImage {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Intensity range for color scaling. A zero-dynamic-range image is
    /// widened by one unit so the renderer never sees an empty interval.
    pub fn display_range(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return (0.0, DEGENERATE_RANGE_PAD);
        }
        if max <= min {
            max = min + DEGENERATE_RANGE_PAD;
        }
        (min, max)
    }
}

/// Why a roi has no displayable image. Expected and user-facing; rendered
/// as message text, never propagated as a hard error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    #[error("no image stack configured")]
    NoSourceConfigured,

    #[error("not enough frames in memory")]
    InsufficientFrames,

    #[error("generation failed")]
    GenerationFailed,
}

/// What to ask the raw data source for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// Already-resident frames only; the display never triggers disk I/O.
    CacheOnly,
}

/// Source of raw imaging frames, externally owned. Optional: a display can
/// operate on stored images alone.
pub trait RawDataSource: Send + Sync {
    /// Frame volume, shape = (frames, height, width). `None` when nothing
    /// is resident for the given request.
    fn frame_set(&self, request: FrameRequest) -> Option<Arc<Array3<f32>>>;
}

/// External numeric pipeline that derives a thumbnail image from a frame
/// volume and a roi. `None` means the pipeline could not produce one.
pub trait ThumbnailPipeline: Send + Sync {
    fn generate(&self, frames: &Array3<f32>, roi: &Roi) -> Option<Array2<f32>>;
}

/// Dashboard/log channel for operator-facing status text.
///
/// All methods have default no-op implementations.
pub trait StatusReporter: Send + Sync {
    fn display_message(&self, _text: &str) {}
}

/// No-op status reporter, for hosts without a dashboard.
pub struct NoOpStatusReporter;
impl StatusReporter for NoOpStatusReporter {}

/// Resolves a displayable image for a roi: cache, then the roi's stored
/// image, then on-demand generation from the raw data source.
pub struct ImageResolver {
    cache: ImageCache,
    min_cached_frames: usize,
    source: Option<Arc<dyn RawDataSource>>,
    pipeline: Arc<dyn ThumbnailPipeline>,
    reporter: Arc<dyn StatusReporter>,
    /// One-shot latch for the insufficient-frames dashboard warning.
    frame_warning_sent: bool,
}

impl ImageResolver {
    pub fn new(
        config: &DisplayConfig,
        pipeline: Arc<dyn ThumbnailPipeline>,
        source: Option<Arc<dyn RawDataSource>>,
        reporter: Arc<dyn StatusReporter>,
    ) -> Self {
        Self {
            cache: ImageCache::new(),
            min_cached_frames: config.min_cached_frames,
            source,
            pipeline,
            reporter,
            frame_warning_sent: false,
        }
    }

    /// Resolve a display image for `roi`.
    ///
    /// On successful generation the image is written back onto
    /// `roi.stored_image` so later lookups no longer need the data source.
    pub fn resolve(&mut self, roi: &mut Roi) -> std::result::Result<DisplayImage, Unavailable> {
        if let Some(cached) = self.cache.get(roi.id) {
            debug!(id = roi.id.0, "Cache hit");
            return Ok(cached.clone());
        }

        if let Some(stored) = &roi.stored_image {
            if roi.has_stored_image() {
                let image = DisplayImage::new(stored.clone());
                self.cache.insert(roi.id, image.clone());
                debug!(id = roi.id.0, "Using stored roi image");
                return Ok(image);
            }
        }

        let Some(source) = &self.source else {
            debug!(id = roi.id.0, "No raw data source configured");
            return Err(Unavailable::NoSourceConfigured);
        };

        let frames = match source.frame_set(FrameRequest::CacheOnly) {
            Some(frames) if frames.dim().0 >= self.min_cached_frames => frames,
            frames => {
                let resident = frames.map_or(0, |f| f.dim().0);
                if !self.frame_warning_sent {
                    self.frame_warning_sent = true;
                    warn!(
                        resident,
                        required = self.min_cached_frames,
                        "Too few resident frames"
                    );
                    self.reporter.display_message(INSUFFICIENT_FRAMES_WARNING);
                }
                return Err(Unavailable::InsufficientFrames);
            }
        };

        match self.pipeline.generate(&frames, roi) {
            Some(data) => {
                let image = DisplayImage::new(data.clone());
                roi.stored_image = Some(data);
                self.cache.insert(roi.id, image.clone());
                debug!(id = roi.id.0, "Generated roi image");
                Ok(image)
            }
            None => {
                debug!(id = roi.id.0, "Thumbnail generation produced no image");
                Err(Unavailable::GenerationFailed)
            }
        }
    }

    /// Drop the cached image for `id`; the next resolve re-derives it.
    pub fn invalidate(&mut self, id: RoiId) {
        self.cache.invalidate(id);
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }
}
