pub mod clock;
pub mod countdown;
pub mod cycle_observer;
pub mod engine;
pub mod schedule;
pub mod signal_state;
