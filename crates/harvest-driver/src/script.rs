//! Remote execution of control scripts.

use std::path::{Path, PathBuf};

use harvest_probe::{ProbeControl, Session};

use crate::Error;
use crate::progress::Progress;
use crate::wait::{self, PollConfig};

/// Makes the remote debugger execute the control script at `path`.
///
/// The path is resolved to an absolute path first: the remote side
/// interprets relative paths against its own working directory, not ours. A
/// path that cannot be resolved (e.g., nonexistent) is fatal with the
/// underlying resolution error.
///
/// The load command returns as soon as the script is accepted; the remote
/// interpreter keeps executing it asynchronously, so this blocks until the
/// interpreter reports it finished.
pub fn run_script<P: ProbeControl>(
    session: &mut Session<P>,
    poll: &PollConfig,
    progress: &mut impl Progress,
    path: &Path,
) -> crate::Result<PathBuf> {
    let script = std::fs::canonicalize(path).map_err(|source| Error::ScriptPath {
        path: path.to_path_buf(),
        source,
    })?;

    let command = format!("DO \"{}\"", script.display());

    tracing::info!(script = %script.display(), "remotely running control script");

    session
        .command(&command)
        .map_err(|source| Error::Command { command, source })?;

    wait::wait_script_done(session, poll, progress)?;

    Ok(script)
}

/// Resets the target through the remote debugger.
///
/// Like a script load, the reset completes asynchronously on the remote
/// side; this blocks until the interpreter is idle again.
pub fn reset_target<P: ProbeControl>(
    session: &mut Session<P>,
    poll: &PollConfig,
    progress: &mut impl Progress,
) -> crate::Result<()> {
    const RESET_COMMAND: &str = "SYStem.RESetTarget";

    tracing::info!("resetting the target");

    session
        .command(RESET_COMMAND)
        .map_err(|source| Error::Command {
            command: RESET_COMMAND.to_owned(),
            source,
        })?;

    wait::wait_script_done(session, poll, progress)
}
