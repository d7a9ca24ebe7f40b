use std::time::Duration;

/// Time source for the blocking countdown.
///
/// The engine never reads wall-clock time; it only sleeps. Injecting the
/// clock lets tests run full signal cycles without real delays.
pub trait Clock: Send {
    fn sleep(&mut self, duration: Duration);
}
