use std::path::PathBuf;

use harvest_probe::{Error as ProbeError, StatusCode};

/// Error type of this crate.
///
/// There is no local recovery beyond the bounded retry of transient
/// communication failures: every value of this type is fatal to the run, and
/// [exit_code](Self::exit_code) says how the process should report it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The probe session could not be opened.
    #[error("failed to open the probe session")]
    SessionOpen(#[source] ProbeError),

    /// The execution state query failed (after retries, if transient).
    #[error("failed to query the target execution state")]
    ExecStateQuery(#[source] ProbeError),

    /// The script-interpreter state query failed (after retries, if
    /// transient).
    #[error("failed to query the script interpreter state")]
    ScriptStateQuery(#[source] ProbeError),

    /// The target reported its debug system as down.
    #[error("target system is down")]
    SystemDown,

    /// The target reported its debug system as halted.
    #[error("target system is halted")]
    SystemHalted,

    /// The script interpreter is blocked on interactive input that will
    /// never arrive.
    #[error("script interpreter is waiting for interactive input")]
    DialogOpen,

    /// A resume request was rejected.
    #[error("failed to resume the target")]
    Resume(#[source] ProbeError),

    /// A remote directive was rejected.
    #[error("failed to execute remote command `{command}`")]
    Command {
        /// The rejected directive.
        command: String,
        /// Probe failure.
        #[source]
        source: ProbeError,
    },

    /// The control script path could not be resolved to an absolute path.
    #[error("cannot resolve script path `{path}`")]
    ScriptPath {
        /// Path as given by the caller.
        path: PathBuf,
        /// Underlying resolution error.
        #[source]
        source: std::io::Error,
    },

    /// The termination status word does not match the expected sentinel.
    #[error("unexpected termination status: expected {expected:#010x}, got {actual:#010x}")]
    StatusMismatch {
        /// Sentinel the target leaves on successful termination.
        expected: u32,
        /// Value actually read from the status variable.
        actual: u32,
    },

    /// A named target variable could not be read.
    #[error("failed to read variable `{name}`")]
    Variable {
        /// Name of the variable.
        name: String,
        /// Probe failure.
        #[source]
        source: ProbeError,
    },

    /// The bulk memory read of the result buffer failed.
    #[error("failed to read {len} bytes from target address {addr:#010x}")]
    MemoryRead {
        /// Address of the result buffer.
        addr: u32,
        /// Requested length.
        len: usize,
        /// Probe failure.
        #[source]
        source: ProbeError,
    },

    /// The bulk memory read returned fewer bytes than requested.
    #[error("short read from target address {addr:#010x}: {got} of {want} bytes")]
    ShortRead {
        /// Address of the result buffer.
        addr: u32,
        /// Bytes actually returned.
        got: usize,
        /// Bytes requested.
        want: usize,
    },

    /// The outcome dump could not be written.
    #[error("failed to write dump to `{path}`")]
    Dump {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Session teardown failed on the explicit close path.
    #[error("probe session teardown failed")]
    Teardown(#[source] ProbeError),

    /// A termination signal was recorded while waiting on the target.
    #[error("interrupted by signal {signal}")]
    Interrupted {
        /// Signal number that was recorded.
        signal: i32,
    },
}

impl Error {
    /// Process exit code mirroring the underlying failure.
    ///
    /// Probe failures pass their status code through, I/O failures report
    /// the OS error number, interrupts report `128 + signal`; anything else
    /// is a generic nonzero value.
    ///
    /// Negative probe codes pass through unchanged; the OS reduces the exit
    /// status modulo 256, so a status of -1 reports as 255 to the shell.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted { signal } => 128 + signal,
            Self::ScriptPath { source, .. } | Self::Dump { source, .. } => {
                source.raw_os_error().unwrap_or(1)
            }
            other => match other.probe_status() {
                Some(StatusCode(0)) | None => 1,
                Some(StatusCode(code)) => code,
            },
        }
    }

    fn probe_status(&self) -> Option<StatusCode> {
        let source = match self {
            Self::SessionOpen(e)
            | Self::ExecStateQuery(e)
            | Self::ScriptStateQuery(e)
            | Self::Resume(e)
            | Self::Teardown(e) => e,
            Self::Command { source, .. }
            | Self::Variable { source, .. }
            | Self::MemoryRead { source, .. } => source,
            _ => return None,
        };

        source.status()
    }
}

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;
