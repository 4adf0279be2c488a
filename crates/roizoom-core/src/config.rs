use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MIN_CACHED_FRAMES, DEFAULT_UPSAMPLE_FACTOR};

/// Render-time policy for the thumbnail display.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Integer scale applied to the view bounds and boundary coordinates.
    #[serde(default = "default_upsample_factor")]
    pub upsample_factor: u32,
    /// Minimum resident frame count required for on-demand generation.
    #[serde(default = "default_min_cached_frames")]
    pub min_cached_frames: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            upsample_factor: DEFAULT_UPSAMPLE_FACTOR,
            min_cached_frames: DEFAULT_MIN_CACHED_FRAMES,
        }
    }
}

fn default_upsample_factor() -> u32 {
    DEFAULT_UPSAMPLE_FACTOR
}

fn default_min_cached_frames() -> usize {
    DEFAULT_MIN_CACHED_FRAMES
}
