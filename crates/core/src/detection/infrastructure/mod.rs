pub mod model_artifacts;
pub mod onnx_age_classifier;
pub mod onnx_face_localizer;
pub mod preprocess;
