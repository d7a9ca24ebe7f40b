pub mod age_bucket;
pub mod bounding_box;
pub mod constants;
pub mod frame;
