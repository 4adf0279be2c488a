use crate::roi::{BoundingBox, Roi};

/// Map a roi boundary from source pixel space into upsampled display
/// space.
///
/// Each `(row, col)` vertex becomes an `[x, y]` display point:
/// `x = (col - bbox.left + 1) * factor`, `y = (row - bbox.top + 1) * factor`.
/// The +1 keeps the bounding-box corner at display coordinate `factor`
/// rather than 0, and the row/col → y/x swap matches image-display axis
/// convention. Recomputed on every update; the factor and bounding box are
/// render-time parameters, not cached state.
pub fn map_boundary(roi: &Roi, upsample_factor: u32) -> Vec<[f64; 2]> {
    let f = f64::from(upsample_factor);
    roi.boundary
        .iter()
        .map(|&[row, col]| {
            [
                (col - roi.bbox.left + 1.0) * f,
                (row - roi.bbox.top + 1.0) * f,
            ]
        })
        .collect()
}

/// Exact inverse of [`map_boundary`]: display `[x, y]` points back to
/// source `(row, col)` vertices.
pub fn unmap_boundary(
    points: &[[f64; 2]],
    bbox: &BoundingBox,
    upsample_factor: u32,
) -> Vec<[f64; 2]> {
    let f = f64::from(upsample_factor);
    points
        .iter()
        .map(|&[x, y]| [y / f + bbox.top - 1.0, x / f + bbox.left - 1.0])
        .collect()
}
