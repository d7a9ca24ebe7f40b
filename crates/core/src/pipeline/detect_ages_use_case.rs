use crate::detection::domain::age_classifier::AgeClassifier;
use crate::detection::domain::detection::Detection;
use crate::detection::domain::face_localizer::FaceLocalizer;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::constants::MIN_FACE_CROP_SIDE;
use crate::shared::frame::Frame;

/// Per-frame detection pipeline: localize → filter → crop → classify.
///
/// Pure apart from model-session state; an empty result is a valid
/// outcome (`Ok(vec![])`), distinct from a pipeline failure.
pub struct DetectAgesUseCase {
    localizer: Box<dyn FaceLocalizer>,
    classifier: Box<dyn AgeClassifier>,
    min_confidence: f32,
}

impl DetectAgesUseCase {
    pub fn new(
        localizer: Box<dyn FaceLocalizer>,
        classifier: Box<dyn AgeClassifier>,
        min_confidence: f32,
    ) -> Self {
        Self {
            localizer,
            classifier,
            min_confidence,
        }
    }

    /// Detects faces in the frame and classifies each one's age bucket.
    ///
    /// Candidates at or below the confidence threshold, and crops with
    /// either side under 20 px, are skipped without error. Result order
    /// is the localizer's output order, never confidence-sorted.
    pub fn execute(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
        let candidates = self.localizer.localize(frame)?;

        let mut detections = Vec::new();
        for candidate in candidates {
            if candidate.score <= self.min_confidence {
                continue;
            }

            let bounding_box =
                BoundingBox::from_normalized(candidate.bbox, frame.width(), frame.height());
            let Some(crop) = frame.crop(&bounding_box) else {
                continue;
            };
            if crop.width() < MIN_FACE_CROP_SIDE || crop.height() < MIN_FACE_CROP_SIDE {
                continue;
            }

            let scores = self.classifier.classify(&crop)?;
            let (age_bucket, age_confidence) = scores.arg_max();
            detections.push(Detection {
                bounding_box,
                age_bucket,
                age_confidence,
            });
        }

        Ok(detections)
    }
}
