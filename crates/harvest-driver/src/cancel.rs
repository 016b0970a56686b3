//! Process-wide stop request, recorded from signal context.
//!
//! A signal handler must not tear the probe session down itself: it only
//! records the signal number here, and the blocking waiters observe it at
//! their next poll boundary, unwinding through ordinary control flow so the
//! one cleanup pass runs from non-signal context.

use std::sync::atomic::{AtomicI32, Ordering};

static PENDING_SIGNAL: AtomicI32 = AtomicI32::new(0);

/// Records a stop request.
///
/// Async-signal-safe: a single atomic store.
pub fn request_stop(signal: i32) {
    PENDING_SIGNAL.store(signal, Ordering::SeqCst);
}

/// Returns the recorded signal number, if a stop was requested.
pub fn pending_signal() -> Option<i32> {
    match PENDING_SIGNAL.load(Ordering::SeqCst) {
        0 => None,
        signal => Some(signal),
    }
}

/// Clears a previously recorded stop request.
pub fn clear() {
    PENDING_SIGNAL.store(0, Ordering::SeqCst);
}
