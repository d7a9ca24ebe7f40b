use crate::shared::age_bucket::AgeBucket;
use crate::signal::domain::clock::Clock;
use crate::signal::domain::countdown;
use crate::signal::domain::cycle_observer::{CycleObserver, CyclePhase};
use crate::signal::domain::schedule::SignalSchedule;
use crate::signal::domain::signal_state::SignalState;

/// The signal timing state machine for one simulated intersection.
///
/// Holds the lamp state as a field so independent intersections can run
/// side by side. A cycle is strictly sequential and non-preemptible:
/// `run_cycle` blocks through the transient-off warning and the green
/// phase, then returns with the lamp back on red. Observations arriving
/// while a cycle runs are dropped by construction, because the frame loop
/// cannot re-enter detection until `run_cycle` returns.
pub struct SignalEngine {
    schedule: SignalSchedule,
    state: SignalState,
    clock: Box<dyn Clock>,
    observer: Box<dyn CycleObserver>,
}

impl SignalEngine {
    /// Signal starts red, before the first frame is pulled.
    pub fn new(clock: Box<dyn Clock>, observer: Box<dyn CycleObserver>) -> Self {
        Self {
            schedule: SignalSchedule,
            state: SignalState::Red,
            clock,
            observer,
        }
    }

    pub fn state(&self) -> SignalState {
        self.state
    }

    /// Runs one full RED → GREEN → RED cycle for the observed bucket.
    pub fn run_cycle(&mut self, bucket: AgeBucket) {
        let entry = self.schedule.entry(bucket);

        self.observer
            .phase_started(CyclePhase::TransientOff, entry.red_off_delay_secs);
        countdown::run(
            entry.red_off_delay_secs,
            self.clock.as_mut(),
            self.observer.as_mut(),
        );
        self.state = SignalState::Green;
        self.observer.signal_changed(SignalState::Green);

        self.observer
            .phase_started(CyclePhase::GreenHolding, entry.green_on_secs);
        countdown::run(
            entry.green_on_secs,
            self.clock.as_mut(),
            self.observer.as_mut(),
        );
        self.state = SignalState::Red;
        self.observer.signal_changed(SignalState::Red);

        self.observer.phase_started(CyclePhase::RedHolding, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Event {
        Phase(CyclePhase, u64),
        Tick(u64),
        Signal(SignalState),
    }

    struct ManualClock {
        slept_secs: Arc<Mutex<u64>>,
    }

    impl Clock for ManualClock {
        fn sleep(&mut self, duration: Duration) {
            *self.slept_secs.lock().unwrap() += duration.as_secs();
        }
    }

    struct RecordingObserver {
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl CycleObserver for RecordingObserver {
        fn phase_started(&mut self, phase: CyclePhase, duration_secs: u64) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Phase(phase, duration_secs));
        }
        fn countdown_tick(&mut self, remaining_secs: u64) {
            self.events.lock().unwrap().push(Event::Tick(remaining_secs));
        }
        fn signal_changed(&mut self, state: SignalState) {
            self.events.lock().unwrap().push(Event::Signal(state));
        }
    }

    fn engine_with_recorder() -> (SignalEngine, Arc<Mutex<Vec<Event>>>, Arc<Mutex<u64>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let slept = Arc::new(Mutex::new(0));
        let engine = SignalEngine::new(
            Box::new(ManualClock {
                slept_secs: slept.clone(),
            }),
            Box::new(RecordingObserver {
                events: events.clone(),
            }),
        );
        (engine, events, slept)
    }

    #[test]
    fn test_initial_state_is_red() {
        let (engine, _, _) = engine_with_recorder();
        assert_eq!(engine.state(), SignalState::Red);
    }

    #[test]
    fn test_cycle_visits_each_phase_once() {
        let (mut engine, events, _) = engine_with_recorder();
        engine.run_cycle(AgeBucket::Infant);

        let phases: Vec<Event> = events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| matches!(e, Event::Phase(..)))
            .cloned()
            .collect();
        assert_eq!(
            phases,
            vec![
                Event::Phase(CyclePhase::TransientOff, 10),
                Event::Phase(CyclePhase::GreenHolding, 20),
                Event::Phase(CyclePhase::RedHolding, 0),
            ]
        );
    }

    #[test]
    fn test_green_only_between_transitions() {
        let (mut engine, events, _) = engine_with_recorder();
        engine.run_cycle(AgeBucket::Senior);

        let events = events.lock().unwrap();
        let green_at = events
            .iter()
            .position(|e| *e == Event::Signal(SignalState::Green))
            .unwrap();
        let red_at = events
            .iter()
            .position(|e| *e == Event::Signal(SignalState::Red))
            .unwrap();
        assert!(green_at < red_at);

        // All ticks before the green transition belong to the 10s transient,
        // all ticks between the transitions to the 45s green phase.
        let transient_ticks = events[..green_at]
            .iter()
            .filter(|e| matches!(e, Event::Tick(_)))
            .count();
        let green_ticks = events[green_at..red_at]
            .iter()
            .filter(|e| matches!(e, Event::Tick(_)))
            .count();
        assert_eq!(transient_ticks, 10);
        assert_eq!(green_ticks, 45);
    }

    #[test]
    fn test_state_red_after_cycle() {
        let (mut engine, _, _) = engine_with_recorder();
        engine.run_cycle(AgeBucket::YoungAdult);
        assert_eq!(engine.state(), SignalState::Red);
    }

    #[test]
    fn test_cycle_sleeps_full_duration() {
        let (mut engine, _, slept) = engine_with_recorder();
        engine.run_cycle(AgeBucket::Infant); // 10 + 20
        assert_eq!(*slept.lock().unwrap(), 30);

        engine.run_cycle(AgeBucket::Senior); // 10 + 45
        assert_eq!(*slept.lock().unwrap(), 30 + 55);
    }

    #[test]
    fn test_consecutive_cycles_are_independent() {
        let (mut engine, events, _) = engine_with_recorder();
        engine.run_cycle(AgeBucket::Teen);
        engine.run_cycle(AgeBucket::Teen);

        let signal_count = events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| matches!(e, Event::Signal(_)))
            .count();
        assert_eq!(signal_count, 4); // green, red per cycle
        assert_eq!(engine.state(), SignalState::Red);
    }
}
