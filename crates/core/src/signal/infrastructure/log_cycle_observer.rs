use crate::signal::domain::countdown::format_remaining;
use crate::signal::domain::cycle_observer::{CycleObserver, CyclePhase};
use crate::signal::domain::signal_state::SignalState;

/// Renders cycle events as operator messages through the `log` facade.
pub struct LogCycleObserver;

impl CycleObserver for LogCycleObserver {
    fn phase_started(&mut self, phase: CyclePhase, duration_secs: u64) {
        log::info!("{}", phase_message(phase, duration_secs));
    }

    fn countdown_tick(&mut self, remaining_secs: u64) {
        log::info!("{}", format_remaining(remaining_secs));
    }

    fn signal_changed(&mut self, state: SignalState) {
        log::info!("signal is now {state}");
    }
}

fn phase_message(phase: CyclePhase, duration_secs: u64) -> String {
    match phase {
        CyclePhase::TransientOff => {
            format!("red lamp going out in {duration_secs}s")
        }
        CyclePhase::GreenHolding => {
            format!("green lamp on for {duration_secs}s")
        }
        CyclePhase::RedHolding => "red lamp back on, awaiting next pedestrian".to_string(),
    }
}
