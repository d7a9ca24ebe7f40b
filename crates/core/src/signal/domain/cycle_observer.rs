use crate::signal::domain::signal_state::SignalState;

/// The engine's position within one signal cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CyclePhase {
    /// Red lamp on, waiting for an age observation.
    RedHolding,
    /// Warning countdown before the red lamp goes out.
    TransientOff,
    /// Green lamp on for the bucket's dwell time.
    GreenHolding,
}

/// Observer seam for signal cycles: phase changes, countdown ticks, and
/// lamp transitions.
///
/// This is where lamp hardware would attach; the core only reports.
pub trait CycleObserver: Send {
    /// A phase began. `duration_secs` is 0 for the indefinite
    /// `RedHolding` re-entry at the end of a cycle.
    fn phase_started(&mut self, phase: CyclePhase, duration_secs: u64);

    /// One countdown tick; `remaining_secs` counts down to 1.
    fn countdown_tick(&mut self, remaining_secs: u64);

    /// The lamp changed.
    fn signal_changed(&mut self, state: SignalState);
}

/// Discards all cycle events.
pub struct NullCycleObserver;

impl CycleObserver for NullCycleObserver {
    fn phase_started(&mut self, _phase: CyclePhase, _duration_secs: u64) {}
    fn countdown_tick(&mut self, _remaining_secs: u64) {}
    fn signal_changed(&mut self, _state: SignalState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_observer_is_noop() {
        let mut observer = NullCycleObserver;
        observer.phase_started(CyclePhase::TransientOff, 10);
        observer.countdown_tick(3);
        observer.signal_changed(SignalState::Green);
    }
}
