use std::time::Duration;

use crate::signal::domain::clock::Clock;
use crate::signal::domain::cycle_observer::CycleObserver;

/// Blocking countdown: exactly `secs` one-second ticks, each reported to
/// the observer before the clock sleeps. `secs == 0` returns immediately
/// with no ticks. Always runs to zero; there is no cancellation.
pub fn run(secs: u64, clock: &mut dyn Clock, observer: &mut dyn CycleObserver) {
    for remaining in (1..=secs).rev() {
        observer.countdown_tick(remaining);
        clock.sleep(Duration::from_secs(1));
    }
}

/// Renders remaining seconds as `mm:ss`.
pub fn format_remaining(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
