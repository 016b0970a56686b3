//! Breakpoint-based synchronization with the target.
//!
//! The target's control flow is treated as a sequence of
//! breakpoint-delimited checkpoints. The harness cannot distinguish an
//! intentional diagnostic stop from any other stop except by the identity of
//! the symbol resolved at the halt address; symbol names survive relinking,
//! addresses do not.

use harvest_probe::{ProbeControl, Session};

use crate::Error;
use crate::progress::Progress;
use crate::wait::{self, PollConfig};

/// Symbols marking the diagnostic entry points of the target runtime.
///
/// Reaching one of these means the target signalled its end-of-test
/// condition.
pub const ERROR_ENTRY_SYMBOLS: &[&str] = &["em_raise", "em_early_raise"];

/// A stop whose location was successfully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStop {
    /// Halt address.
    pub addr: u32,

    /// Symbol resolved at the halt address.
    pub symbol: String,
}

/// Resumes the target until it stops at an error-class symbol.
///
/// Each iteration resumes execution, blocks until the target is stopped,
/// and classifies the stop by its resolved symbol. Location-resolution
/// failures are logged and classified as ordinary stops: an unreadable or
/// meaningless name never matches the error-entry set, so the loop simply
/// resumes again.
pub fn run_to_error_stop<P: ProbeControl>(
    session: &mut Session<P>,
    poll: &PollConfig,
    progress: &mut impl Progress,
    error_symbols: &[String],
) -> crate::Result<ResolvedStop> {
    loop {
        session.resume().map_err(Error::Resume)?;
        tracing::info!("going to next breakpoint");

        wait::wait_until_stopped(session, poll, progress)?;

        let Some(stop) = resolve_stop(session) else {
            tracing::debug!("ordinary stop at unresolved location");
            continue;
        };

        if error_symbols.iter().any(|name| *name == stop.symbol) {
            tracing::info!(
                symbol = %stop.symbol,
                addr = format_args!("{:#010x}", stop.addr),
                "error-class stop reached"
            );
            return Ok(stop);
        }

        tracing::debug!(
            symbol = %stop.symbol,
            addr = format_args!("{:#010x}", stop.addr),
            "ordinary stop"
        );
    }
}

/// Best-effort resolution of the current stop location.
///
/// Failures are reported to the log, never to the caller: classification
/// falls through to "ordinary".
fn resolve_stop<P: ProbeControl>(session: &mut Session<P>) -> Option<ResolvedStop> {
    let addr = match session.program_counter() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read the current program location");
            return None;
        }
    };

    match session.symbol_at(addr) {
        Ok(symbol) => Some(ResolvedStop { addr, symbol }),
        Err(e) => {
            tracing::warn!(
                error = %e,
                addr = format_args!("{addr:#010x}"),
                "failed to resolve the stop symbol"
            );
            None
        }
    }
}
