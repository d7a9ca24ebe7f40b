use crate::shared::frame::Frame;

/// One raw localizer hit: a confidence score and a normalized
/// `[x0, y0, x1, y1]` box in `0..1` frame coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCandidate {
    pub score: f32,
    pub bbox: [f32; 4],
}

/// Domain interface for face localization.
///
/// Implementations wrap an opaque scoring model and may hold session state,
/// hence `&mut self`. Candidates are returned in model output order; the
/// caller applies confidence and size filtering.
pub trait FaceLocalizer: Send {
    fn localize(&mut self, frame: &Frame) -> Result<Vec<FaceCandidate>, Box<dyn std::error::Error>>;
}
