use std::path::Path;
use std::time::Duration;

use harvest_probe::{ProbeConfig, ProbeControl, Session};

use crate::extract::{self, Outcome, OutcomeSpec};
use crate::progress::Progress;
use crate::wait::PollConfig;
use crate::{Error, script, sync};

/// Configuration of one harvest run.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Pacing of the execution-state waits.
    pub exec_poll: PollConfig,

    /// Pacing of the script-interpreter waits.
    pub script_poll: PollConfig,

    /// Symbols classified as error-class stops.
    pub error_symbols: Vec<String>,

    /// Target memory contract of the outcome record.
    pub outcome: OutcomeSpec,

    /// Whether to reset the target after the control script completes.
    pub reset_target: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            exec_poll: PollConfig::with_interval(Duration::from_secs(5)),
            script_poll: PollConfig::with_interval(Duration::from_secs(2)),
            error_symbols: sync::ERROR_ENTRY_SYMBOLS
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            outcome: OutcomeSpec::default(),
            reset_target: false,
        }
    }
}

/// Drives one target run over an owned probe session.
///
/// The session is torn down exactly once: explicitly through
/// [finish](Self::finish), or on drop (logging, not crashing) when a run
/// fails and unwinds through `?`.
pub struct Driver<P: ProbeControl> {
    session: Session<P>,
    config: DriverConfig,
}

impl<P: ProbeControl> Driver<P> {
    /// Opens a probe session over `probe` and wraps it in a driver.
    pub fn open(probe: P, probe_config: &ProbeConfig, config: DriverConfig) -> crate::Result<Self> {
        let session = Session::open(probe, probe_config).map_err(Error::SessionOpen)?;

        Ok(Self::new(session, config))
    }

    /// Wraps an already-open session.
    pub fn new(session: Session<P>, config: DriverConfig) -> Self {
        Self { session, config }
    }

    /// Runs the target to its diagnostic stop and extracts the outcome.
    ///
    /// Flow: remotely execute the control script, optionally reset the
    /// target, resume breakpoint-to-breakpoint until an error-class stop,
    /// then validate the termination status and read the result buffer.
    pub fn run(&mut self, script_path: &Path, progress: &mut impl Progress) -> crate::Result<Outcome> {
        script::run_script(
            &mut self.session,
            &self.config.script_poll,
            progress,
            script_path,
        )?;

        if self.config.reset_target {
            script::reset_target(&mut self.session, &self.config.script_poll, progress)?;
        }

        sync::run_to_error_stop(
            &mut self.session,
            &self.config.exec_poll,
            progress,
            &self.config.error_symbols,
        )?;

        extract::read_outcome(&mut self.session, &self.config.outcome)
    }

    /// Runs the target and persists the outcome dump to `output`.
    ///
    /// The output file is only created once extraction succeeded; a failed
    /// run leaves no file behind.
    pub fn run_and_dump(
        &mut self,
        script_path: &Path,
        output: &Path,
        progress: &mut impl Progress,
    ) -> crate::Result<Outcome> {
        let outcome = self.run(script_path, progress)?;
        outcome.write_to(output)?;
        Ok(outcome)
    }

    /// Tears the probe session down, propagating teardown failures.
    pub fn finish(mut self) -> crate::Result<()> {
        self.session.close().map_err(Error::Teardown)
    }
}
