use std::sync::Arc;

use ndarray::ArrayView2;
use tracing::{debug, warn};

use crate::config::DisplayConfig;
use crate::consts::{EMPTY_OUTLINE, NO_SELECTION_MESSAGE};
use crate::error::{Result, RoizoomError};
use crate::event::{ClassificationEvent, CollectionEvent, EventKind, SelectionEvent};
use crate::geometry;
use crate::resolve::{
    ImageResolver, RawDataSource, StatusReporter, ThumbnailPipeline, Unavailable,
};
use crate::roi::{Roi, RoiProvider, RoiRef};

/// Rendering surface the display draws onto. Receives resolved pixel data
/// and display-space geometry; owns the actual blit/line primitives.
pub trait Renderer {
    /// Blit `pixels` stretched into the current view bounds, color-scaled
    /// to `display_range`.
    fn show_image(&mut self, pixels: ArrayView2<'_, f32>, display_range: (f32, f32));

    /// Draw the closed roi outline through `points` in display space.
    fn show_outline(&mut self, points: &[[f64; 2]]);

    /// Show status text in place of an image.
    fn show_message(&mut self, text: &str);

    /// Announce display-space extents and the color range for them.
    fn set_view_bounds(&mut self, width: usize, height: usize, color_range: (f32, f32));

    /// Remove any currently shown image.
    fn clear(&mut self);
}

/// What the display is currently showing. Non-empty variants always carry
/// the roi reference from the last event that produced them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayState {
    Empty,
    ShowingImage(RoiRef),
    ShowingUnavailable(RoiRef, Unavailable),
}

/// Capability interface for display variants reacting to a roi collection.
///
/// Every variant consumes the same notification stream; variants that
/// cannot honor a mutation report it through the `Result` rather than
/// silently ignoring it.
pub trait RoiDisplay {
    fn on_collection_changed(
        &mut self,
        rois: &mut dyn RoiProvider,
        event: &CollectionEvent,
    ) -> Result<()>;

    fn on_selection_changed(
        &mut self,
        rois: &mut dyn RoiProvider,
        event: &SelectionEvent,
    ) -> Result<()>;

    fn on_classification_changed(&mut self, _event: &ClassificationEvent) {}

    fn add_rois(&mut self, rois: Vec<Roi>) -> Result<()>;

    fn remove_rois(&mut self, indices: &[usize]) -> Result<()>;
}

/// The zoomed-thumbnail display: shows the most recently selected roi's
/// image with its boundary outline and keeps itself synchronized with the
/// collection's notification stream.
pub struct ThumbnailDisplay {
    config: DisplayConfig,
    resolver: ImageResolver,
    renderer: Box<dyn Renderer>,
    state: DisplayState,
}

impl ThumbnailDisplay {
    pub fn new(
        config: DisplayConfig,
        renderer: Box<dyn Renderer>,
        pipeline: Arc<dyn ThumbnailPipeline>,
        source: Option<Arc<dyn RawDataSource>>,
        reporter: Arc<dyn StatusReporter>,
    ) -> Self {
        let resolver = ImageResolver::new(&config, pipeline, source, reporter);
        Self {
            config,
            resolver,
            renderer,
            state: DisplayState::Empty,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    fn shown_ref(&self) -> Option<RoiRef> {
        match self.state {
            DisplayState::Empty => None,
            DisplayState::ShowingImage(roi_ref) => Some(roi_ref),
            DisplayState::ShowingUnavailable(roi_ref, _) => Some(roi_ref),
        }
    }

    /// Resolve and render the roi at `index`, updating the display state.
    /// Resolver failures become a rendered message; only a bad index is a
    /// hard error.
    fn refresh(&mut self, rois: &mut dyn RoiProvider, index: usize) -> Result<()> {
        let total = rois.len();
        let roi = rois
            .roi_mut(index)
            .ok_or(RoizoomError::RoiIndexOutOfRange { index, total })?;
        let roi_ref = RoiRef { id: roi.id, index };

        match self.resolver.resolve(roi) {
            Ok(image) => {
                let range = image.display_range();
                let factor = self.config.upsample_factor as usize;
                self.renderer
                    .set_view_bounds(image.width() * factor, image.height() * factor, range);
                self.renderer.show_image(image.data.view(), range);
                let outline = geometry::map_boundary(roi, self.config.upsample_factor);
                self.renderer.show_outline(&outline);
                self.state = DisplayState::ShowingImage(roi_ref);
            }
            Err(reason) => {
                debug!(index, %reason, "Roi image unavailable");
                self.renderer.clear();
                self.renderer.show_outline(&EMPTY_OUTLINE);
                self.renderer.show_message(&reason.to_string());
                self.state = DisplayState::ShowingUnavailable(roi_ref, reason);
            }
        }
        Ok(())
    }

    fn clear_display(&mut self) {
        self.renderer.clear();
        self.renderer.show_outline(&EMPTY_OUTLINE);
        self.renderer.show_message(NO_SELECTION_MESSAGE);
        self.state = DisplayState::Empty;
    }
}

impl RoiDisplay for ThumbnailDisplay {
    /// React to content/geometry changes. Batched indices collapse to the
    /// last entry; only a change to the currently displayed roi triggers
    /// invalidation and a redraw.
    fn on_collection_changed(
        &mut self,
        rois: &mut dyn RoiProvider,
        event: &CollectionEvent,
    ) -> Result<()> {
        if !matches!(event.kind, EventKind::Modify | EventKind::Reshape) {
            return Ok(());
        }
        let Some(&index) = event.indices.last() else {
            return Ok(());
        };
        let Some(shown) = self.shown_ref() else {
            debug!(index, "Nothing displayed; change ignored");
            return Ok(());
        };
        if shown.index != index {
            debug!(index, shown = shown.index, "Change does not affect the displayed roi");
            return Ok(());
        }

        self.resolver.invalidate(shown.id);
        self.refresh(rois, index)
    }

    fn on_selection_changed(
        &mut self,
        rois: &mut dyn RoiProvider,
        event: &SelectionEvent,
    ) -> Result<()> {
        match event.selected.last() {
            None => {
                debug!("Selection cleared");
                self.clear_display();
                Ok(())
            }
            Some(&index) => self.refresh(rois, index),
        }
    }

    fn on_classification_changed(&mut self, _event: &ClassificationEvent) {
        // Classification does not affect thumbnail appearance.
        debug!("Classification change ignored");
    }

    fn add_rois(&mut self, _rois: Vec<Roi>) -> Result<()> {
        warn!("add_rois rejected; the thumbnail display does not own the collection");
        Err(RoizoomError::UnsupportedOperation {
            operation: "add_rois",
        })
    }

    fn remove_rois(&mut self, _indices: &[usize]) -> Result<()> {
        warn!("remove_rois rejected; the thumbnail display does not own the collection");
        Err(RoizoomError::UnsupportedOperation {
            operation: "remove_rois",
        })
    }
}
