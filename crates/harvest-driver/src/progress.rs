//! Progress notifications from the blocking waiters.

/// Sink for progress markers emitted while waiting on the target.
///
/// The waiters call [tick](Self::tick) once per poll cycle that found the
/// target still busy, and [done](Self::done) once when the wait reaches its
/// non-fatal terminal state. Fatal conditions are reported through the
/// returned error instead.
pub trait Progress {
    /// The target is still busy; one poll cycle elapsed.
    fn tick(&mut self);

    /// The wait completed.
    fn done(&mut self);
}

/// Progress sink that discards all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn tick(&mut self) {}

    fn done(&mut self) {}
}
