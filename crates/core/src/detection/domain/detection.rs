use crate::shared::age_bucket::AgeBucket;
use crate::shared::bounding_box::BoundingBox;

/// One localized face with its age classification.
///
/// Immutable once built; lives for a single frame iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub bounding_box: BoundingBox,
    pub age_bucket: AgeBucket,
    pub age_confidence: f32,
}

impl Detection {
    /// Annotation text, e.g. `(21-32): 87.50%`.
    pub fn caption(&self) -> String {
        format!("{}: {:.2}%", self.age_bucket, self.age_confidence * 100.0)
    }
}
