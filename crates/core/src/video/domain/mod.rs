pub mod frame_source;
pub mod presentation_sink;
