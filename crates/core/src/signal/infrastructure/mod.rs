pub mod log_cycle_observer;
pub mod system_clock;
