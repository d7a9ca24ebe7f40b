/// Frames are resized to this width (aspect preserved) before detection.
pub const CANONICAL_FRAME_WIDTH: u32 = 400;

/// Face crops with either side below this are too small to classify reliably.
pub const MIN_FACE_CROP_SIDE: u32 = 20;

/// Default localizer score threshold.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// Warning period between a red phase ending and the green lamp turning on.
/// Uniform across all age buckets.
pub const RED_OFF_DELAY_SECS: u64 = 10;

/// Fixed file names expected inside each model artifact directory.
pub const MODEL_CONFIG_FILE: &str = "config.json";
pub const MODEL_WEIGHTS_FILE: &str = "model.onnx";
