pub mod error;
pub mod consts;
pub mod config;
pub mod roi;
pub mod event;
pub mod cache;
pub mod resolve;
pub mod geometry;
pub mod display;

pub use config::DisplayConfig;
pub use display::{DisplayState, Renderer, RoiDisplay, ThumbnailDisplay};
pub use error::{Result, RoizoomError};
pub use event::{ClassificationEvent, CollectionEvent, EventKind, SelectionEvent};
pub use resolve::{
    DisplayImage, FrameRequest, ImageResolver, NoOpStatusReporter, RawDataSource, StatusReporter,
    ThumbnailPipeline, Unavailable,
};
pub use roi::{BoundingBox, Roi, RoiId, RoiProvider, RoiRef};
