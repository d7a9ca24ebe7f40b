use std::path::Path;

use crate::detection::domain::face_localizer::{FaceCandidate, FaceLocalizer};
use crate::detection::infrastructure::model_artifacts::{ModelArtifacts, ModelDescriptor};
use crate::detection::infrastructure::preprocess::input_tensor;
use crate::shared::frame::Frame;

/// Number of values per detection row in the SSD output tensor.
const SSD_ROW_LEN: usize = 7;

/// SSD-style face localizer backed by an ONNX Runtime session.
///
/// The model's output tensor has shape `[1, 1, N, 7]`, one row per
/// candidate: `(batch_id, class_id, score, x0, y0, x1, y1)` with
/// normalized box coordinates. Rows come back in model order and are
/// not filtered here.
pub struct OnnxFaceLocalizer {
    session: ort::session::Session,
    descriptor: ModelDescriptor,
}

impl OnnxFaceLocalizer {
    /// Loads the localizer from its artifact directory.
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

impl FaceLocalizer for OnnxFaceLocalizer {
    fn localize(
        &mut self,
        frame: &Frame,
    ) -> Result<Vec<FaceCandidate>, Box<dyn std::error::Error>> {
        let tensor = input_tensor(frame, &self.descriptor);
        let input_value = ort::value::Tensor::from_array(tensor)?;
        let outputs = self.session.run(ort::inputs![input_value])?;

        let detections = outputs[0].try_extract_array::<f32>()?;
        let data = detections
            .as_slice()
            .ok_or("Cannot get detection tensor slice")?;

        decode_ssd_rows(data)
    }
}

/// Decodes the flattened `[1, 1, N, 7]` detection tensor into candidates,
/// preserving row order.
fn decode_ssd_rows(data: &[f32]) -> Result<Vec<FaceCandidate>, Box<dyn std::error::Error>> {
    if data.len() % SSD_ROW_LEN != 0 {
        return Err(format!(
            "face localizer output length {} is not a multiple of {SSD_ROW_LEN}",
            data.len()
        )
        .into());
    }

    Ok(data
        .chunks_exact(SSD_ROW_LEN)
        .map(|row| FaceCandidate {
            score: row[2],
            bbox: [row[3], row[4], row[5], row[6]],
        })
        .collect())
}
