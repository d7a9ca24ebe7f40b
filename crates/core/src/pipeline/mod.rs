pub mod detect_ages_use_case;
pub mod monitor_crossing_use_case;
