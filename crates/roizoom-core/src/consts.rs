/// Minimum number of resident frames required before on-demand thumbnail
/// generation is attempted. Below this the signal estimate is too noisy to
/// be worth showing.
pub const DEFAULT_MIN_CACHED_FRAMES: usize = 100;

/// Default integer upsampling factor applied to the display view bounds.
/// Thumbnails are a handful of pixels across; 4x keeps sub-pixel boundary
/// vertices visually separated.
pub const DEFAULT_UPSAMPLE_FACTOR: u32 = 4;

/// Pad added to a zero-dynamic-range display range so the renderer never
/// receives an empty color interval.
pub const DEGENERATE_RANGE_PAD: f32 = 1.0;

/// Outline geometry rendered when no roi is shown: a single NaN vertex,
/// so renderers holding a live polyline object draw nothing.
pub const EMPTY_OUTLINE: [[f64; 2]; 1] = [[f64::NAN; 2]];

/// Message rendered in place of the thumbnail when the selection is empty.
pub const NO_SELECTION_MESSAGE: &str = "No roi selected";

/// One-shot dashboard warning sent the first time generation is skipped
/// because too few frames are resident.
pub const INSUFFICIENT_FRAMES_WARNING: &str =
    "Not enough frames in memory to generate roi images";
