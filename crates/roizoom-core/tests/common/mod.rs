// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ndarray::{Array2, Array3, ArrayView2};
use roizoom_core::{
    RawDataSource, Renderer, Roi, RoiId, StatusReporter, ThumbnailPipeline, FrameRequest,
};

/// Build a closed square roi boundary with the upper-left vertex at
/// `(top, left)` in source pixel coordinates.
pub fn square_roi(id: u64, top: f64, left: f64, size: f64) -> Roi {
    let boundary = vec![
        [top, left],
        [top, left + size],
        [top + size, left + size],
        [top + size, left],
        [top, left],
    ];
    Roi::from_boundary(RoiId(id), boundary)
}

/// A roi whose stored image is already usable (non-zero).
pub fn roi_with_stored_image(id: u64, fill: f32, dims: (usize, usize)) -> Roi {
    let mut roi = square_roi(id, 1.0, 1.0, 3.0);
    roi.stored_image = Some(Array2::from_elem(dims, fill));
    roi
}

/// One renderer invocation, recorded for assertions.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    Image {
        height: usize,
        width: usize,
        range: (f32, f32),
    },
    Outline(Vec<[f64; 2]>),
    Message(String),
    ViewBounds {
        width: usize,
        height: usize,
        range: (f32, f32),
    },
    Clear,
}

/// Renderer that records every call into a shared log.
pub struct RecordingRenderer {
    calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl RecordingRenderer {
    pub fn new() -> (Box<dyn Renderer>, Arc<Mutex<Vec<RenderCall>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let renderer = Box::new(Self {
            calls: calls.clone(),
        });
        (renderer, calls)
    }
}

impl Renderer for RecordingRenderer {
    fn show_image(&mut self, pixels: ArrayView2<'_, f32>, display_range: (f32, f32)) {
        let (height, width) = pixels.dim();
        self.calls.lock().unwrap().push(RenderCall::Image {
            height,
            width,
            range: display_range,
        });
    }

    fn show_outline(&mut self, points: &[[f64; 2]]) {
        self.calls
            .lock()
            .unwrap()
            .push(RenderCall::Outline(points.to_vec()));
    }

    fn show_message(&mut self, text: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(RenderCall::Message(text.to_string()));
    }

    fn set_view_bounds(&mut self, width: usize, height: usize, color_range: (f32, f32)) {
        self.calls.lock().unwrap().push(RenderCall::ViewBounds {
            width,
            height,
            range: color_range,
        });
    }

    fn clear(&mut self) {
        self.calls.lock().unwrap().push(RenderCall::Clear);
    }
}

/// Raw data source with a fixed resident frame count and a call counter.
pub struct StubSource {
    frames: Option<Arc<Array3<f32>>>,
    calls: AtomicUsize,
}

impl StubSource {
    /// `count` resident 4x4 frames with a mild gradient so generated
    /// thumbnails are not all-zero.
    pub fn with_frames(count: usize) -> Arc<Self> {
        let frames = Array3::from_shape_fn((count, 4, 4), |(f, r, c)| {
            0.1 + (f + r + c) as f32 * 0.01
        });
        Arc::new(Self {
            frames: Some(Arc::new(frames)),
            calls: AtomicUsize::new(0),
        })
    }

    /// Nothing resident at all.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            frames: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RawDataSource for StubSource {
    fn frame_set(&self, _request: FrameRequest) -> Option<Arc<Array3<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.frames.clone()
    }
}

/// Pipeline returning a configurable image, counting invocations.
pub struct CountingPipeline {
    output: Mutex<Option<Array2<f32>>>,
    calls: AtomicUsize,
}

impl CountingPipeline {
    /// Always produces a `dims` image filled with `fill`.
    pub fn constant(fill: f32, dims: (usize, usize)) -> Arc<Self> {
        Arc::new(Self {
            output: Mutex::new(Some(Array2::from_elem(dims, fill))),
            calls: AtomicUsize::new(0),
        })
    }

    /// Never produces an image.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            output: Mutex::new(None),
            calls: AtomicUsize::new(0),
        })
    }

    /// Swap what the pipeline will produce from now on.
    pub fn set_output(&self, output: Option<Array2<f32>>) {
        *self.output.lock().unwrap() = output;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ThumbnailPipeline for CountingPipeline {
    fn generate(&self, _frames: &Array3<f32>, _roi: &Roi) -> Option<Array2<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.output.lock().unwrap().clone()
    }
}

/// Status reporter collecting dashboard messages.
#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl StatusReporter for RecordingReporter {
    fn display_message(&self, text: &str) {
        self.messages.lock().unwrap().push(text.to_string());
    }
}
