/// Kind of change the roi collection is announcing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Add,
    Modify,
    Reshape,
    Remove,
    SelectionChanged,
    ClassificationChanged,
}

/// Content/geometry change notification from the roi collection.
///
/// `indices` may name several rois when edits were batched; displays that
/// show a single roi collapse the batch to its last entry.
#[derive(Clone, Debug)]
pub struct CollectionEvent {
    pub kind: EventKind,
    pub indices: Vec<usize>,
}

impl CollectionEvent {
    pub fn new(kind: EventKind, indices: Vec<usize>) -> Self {
        Self { kind, indices }
    }
}

/// Selection change notification. An empty `selected` list means nothing
/// is selected.
#[derive(Clone, Debug)]
pub struct SelectionEvent {
    pub selected: Vec<usize>,
}

impl SelectionEvent {
    pub fn new(selected: Vec<usize>) -> Self {
        Self { selected }
    }
}

/// Classification change notification. Carried for interface completeness;
/// classification has no effect on thumbnail appearance.
#[derive(Clone, Debug)]
pub struct ClassificationEvent {
    pub indices: Vec<usize>,
}
