//! Blocking waits on the target's execution and script-interpreter states.

use std::time::Duration;

use harvest_probe::{ExecState, ProbeControl, ScriptState, Session};

use crate::progress::Progress;
use crate::retry::RetryPolicy;
use crate::{Error, cancel, retry};

/// Pacing of one blocking wait.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Sleep between polls while the target is busy.
    pub interval: Duration,

    /// Retry behavior of the underlying state query.
    pub retry: RetryPolicy,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::with_interval(Duration::from_secs(5))
    }
}

impl PollConfig {
    /// Poll configuration with the given interval and the default retry
    /// policy.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            retry: RetryPolicy::default(),
        }
    }
}

/// Waits until the target is provably stopped.
///
/// Re-polls while the target runs, emitting one progress tick per cycle.
/// A down or halted debug system is fatal: the harness cannot reason about
/// the target from there. There is deliberately no timeout; the target
/// either completes or the process is terminated externally, in which case
/// the recorded stop request ends the wait at the next poll boundary.
pub fn wait_until_stopped<P: ProbeControl>(
    session: &mut Session<P>,
    poll: &PollConfig,
    progress: &mut impl Progress,
) -> crate::Result<()> {
    loop {
        if let Some(signal) = cancel::pending_signal() {
            return Err(Error::Interrupted { signal });
        }

        let state =
            retry::query(&poll.retry, || session.execution_state()).map_err(Error::ExecStateQuery)?;

        match state {
            ExecState::Down => return Err(Error::SystemDown),
            ExecState::Halted => return Err(Error::SystemHalted),
            ExecState::Stopped => {
                progress.done();
                return Ok(());
            }
            ExecState::Running => {
                progress.tick();
                std::thread::sleep(poll.interval);
            }
        }
    }
}

/// Waits until the remote script interpreter finishes.
///
/// Same shape as [wait_until_stopped], over the interpreter substate. An
/// open dialog is fatal: the interpreter is blocked on interactive input
/// that will never arrive.
pub fn wait_script_done<P: ProbeControl>(
    session: &mut Session<P>,
    poll: &PollConfig,
    progress: &mut impl Progress,
) -> crate::Result<()> {
    loop {
        if let Some(signal) = cancel::pending_signal() {
            return Err(Error::Interrupted { signal });
        }

        let state =
            retry::query(&poll.retry, || session.script_state()).map_err(Error::ScriptStateQuery)?;

        match state {
            ScriptState::Finished => {
                progress.done();
                return Ok(());
            }
            ScriptState::Running => {
                progress.tick();
                std::thread::sleep(poll.interval);
            }
            ScriptState::DialogOpen => return Err(Error::DialogOpen),
        }
    }
}
