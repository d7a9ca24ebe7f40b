use crate::detection::domain::detection::Detection;
use crate::shared::frame::Frame;

/// What the sink wants the loop to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkSignal {
    Continue,
    /// The operator asked to stop (e.g. quit key in an interactive sink).
    Quit,
}

/// Receives each processed frame with its detections and the measured
/// frame rate. Rendering details (windows, files, overlays) live in
/// implementations.
pub trait PresentationSink: Send {
    fn present(
        &mut self,
        frame: &Frame,
        detections: &[Detection],
        fps: f64,
    ) -> Result<SinkSignal, Box<dyn std::error::Error>>;
}

/// Discards every frame. For headless runs and tests.
pub struct NullPresentationSink;

impl PresentationSink for NullPresentationSink {
    fn present(
        &mut self,
        _frame: &Frame,
        _detections: &[Detection],
        _fps: f64,
    ) -> Result<SinkSignal, Box<dyn std::error::Error>> {
        Ok(SinkSignal::Continue)
    }
}
