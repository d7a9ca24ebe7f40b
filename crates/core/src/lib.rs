pub mod detection;
pub mod pipeline;
pub mod shared;
pub mod signal;
pub mod video;
