use std::collections::HashMap;

use crate::resolve::DisplayImage;
use crate::roi::RoiId;

/// Per-roi cache of resolved display images.
///
/// One entry per id, overwritten on regeneration. There is no eviction
/// policy: only one roi is displayed at a time in practice, and entries
/// are dropped explicitly when a roi's geometry or content changes.
#[derive(Default)]
pub struct ImageCache {
    entries: HashMap<RoiId, DisplayImage>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: RoiId) -> Option<&DisplayImage> {
        self.entries.get(&id)
    }

    pub fn insert(&mut self, id: RoiId, image: DisplayImage) {
        self.entries.insert(id, image);
    }

    /// Drop the entry for `id`, if any. The next resolve for this roi
    /// starts from the roi's stored image or regeneration.
    pub fn invalidate(&mut self, id: RoiId) {
        self.entries.remove(&id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
