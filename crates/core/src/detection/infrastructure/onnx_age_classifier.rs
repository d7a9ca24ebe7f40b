use std::path::Path;

use crate::detection::domain::age_classifier::{AgeClassifier, AgeScores};
use crate::detection::infrastructure::model_artifacts::{ModelArtifacts, ModelDescriptor};
use crate::detection::infrastructure::preprocess::input_tensor;
use crate::shared::frame::Frame;

/// Age-bucket classifier backed by an ONNX Runtime session.
///
/// Consumes a face crop and produces a softmax probability vector over the
/// eight buckets. A vector of any other length is a schema violation and
/// surfaces as an error.
pub struct OnnxAgeClassifier {
    session: ort::session::Session,
    descriptor: ModelDescriptor,
}

impl OnnxAgeClassifier {
    /// Loads the classifier from its artifact directory.
    pub fn new(model_dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let artifacts = ModelArtifacts::load(model_dir)?;
        let session =
            ort::session::Session::builder()?.commit_from_file(&artifacts.weights_path)?;
        Ok(Self {
            session,
            descriptor: artifacts.descriptor,
        })
    }
}

impl AgeClassifier for OnnxAgeClassifier {
    fn classify(&mut self, crop: &Frame) -> Result<AgeScores, Box<dyn std::error::Error>> {
        let tensor = input_tensor(crop, &self.descriptor);
        let input_value = ort::value::Tensor::from_array(tensor)?;
        let outputs = self.session.run(ort::inputs![input_value])?;

        let probabilities = outputs[0].try_extract_array::<f32>()?;
        let data = probabilities
            .as_slice()
            .ok_or("Cannot get probability tensor slice")?;

        AgeScores::from_slice(data)
    }
}
