use ndarray::Array2;

/// Opaque identity of a region of interest. Stable across index shuffles
/// in the owning collection; used as the thumbnail cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoiId(pub u64);

/// Identity plus current index into the external collection. Not owned;
/// looked up per event, so the index is only as fresh as the last event
/// that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoiRef {
    pub id: RoiId,
    pub index: usize,
}

/// Axis-aligned bounding box of a roi boundary, in source pixel
/// coordinates. `top`/`left` is the upper-left corner; vertices are
/// sub-pixel so all fields are floating point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub height: f64,
    pub width: f64,
}

/// A region of interest as read from the external collection.
#[derive(Clone, Debug)]
pub struct Roi {
    pub id: RoiId,
    /// Closed polygon, ordered `(row, col)` pairs in source pixel space.
    pub boundary: Vec<[f64; 2]>,
    pub bbox: BoundingBox,
    /// Previously computed thumbnail, if any. An all-zero array counts as
    /// absent; collections preallocate zero matrices for unprocessed rois.
    pub stored_image: Option<Array2<f32>>,
}

impl Roi {
    pub fn new(id: RoiId, boundary: Vec<[f64; 2]>, bbox: BoundingBox) -> Self {
        Self {
            id,
            boundary,
            bbox,
            stored_image: None,
        }
    }

    /// Compute the bounding box from the boundary vertices.
    pub fn from_boundary(id: RoiId, boundary: Vec<[f64; 2]>) -> Self {
        let bbox = bbox_of(&boundary);
        Self::new(id, boundary, bbox)
    }

    /// Whether the stored image is usable: present, non-empty and not
    /// all-zero.
    pub fn has_stored_image(&self) -> bool {
        self.stored_image
            .as_ref()
            .is_some_and(|img| img.iter().any(|v| *v != 0.0))
    }
}

fn bbox_of(boundary: &[[f64; 2]]) -> BoundingBox {
    let mut top = f64::INFINITY;
    let mut left = f64::INFINITY;
    let mut bottom = f64::NEG_INFINITY;
    let mut right = f64::NEG_INFINITY;
    for &[row, col] in boundary {
        top = top.min(row);
        left = left.min(col);
        bottom = bottom.max(row);
        right = right.max(col);
    }
    if boundary.is_empty() {
        return BoundingBox {
            top: 0.0,
            left: 0.0,
            height: 0.0,
            width: 0.0,
        };
    }
    BoundingBox {
        top,
        left,
        height: bottom - top,
        width: right - left,
    }
}

/// Read/write access to the external roi collection. The display never
/// adds or removes entries; mutable access exists so a generated
/// thumbnail can be written back onto its roi.
pub trait RoiProvider {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn roi(&self, index: usize) -> Option<&Roi>;

    fn roi_mut(&mut self, index: usize) -> Option<&mut Roi>;
}

impl RoiProvider for Vec<Roi> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn roi(&self, index: usize) -> Option<&Roi> {
        self.as_slice().get(index)
    }

    fn roi_mut(&mut self, index: usize) -> Option<&mut Roi> {
        self.as_mut_slice().get_mut(index)
    }
}

impl RoiProvider for [Roi] {
    fn len(&self) -> usize {
        <[Roi]>::len(self)
    }

    fn roi(&self, index: usize) -> Option<&Roi> {
        self.get(index)
    }

    fn roi_mut(&mut self, index: usize) -> Option<&mut Roi> {
        self.get_mut(index)
    }
}
