use std::path::PathBuf;
use std::time::Duration;

use harvest_driver::wait::PollConfig;
use harvest_driver::{DriverConfig, OutcomeSpec, RetryPolicy, sync};
use harvest_probe::ProbeConfig;

/// Runs a control script on a remote debug probe and harvests the target's
/// measurement buffer.
#[derive(clap::Parser)]
#[clap(name = "harvest", version)]
pub struct CliOpts {
    /// Control script to execute on the remote debugger.
    #[clap(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Destination of the raw measurement dump.
    #[clap(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Host running the probe control software.
    #[clap(long, default_value = "localhost")]
    pub node: String,

    /// Port of the probe control channel.
    #[clap(long, default_value_t = 20000)]
    pub port: u16,

    /// Maximum packet length on the control channel, in bytes.
    #[clap(long, default_value_t = 1024)]
    pub packet_len: u16,

    /// Seconds between execution-state polls.
    #[clap(long, default_value_t = 5, value_name = "SECONDS")]
    pub poll_interval: u64,

    /// Seconds between script-interpreter polls.
    #[clap(long, default_value_t = 2, value_name = "SECONDS")]
    pub script_poll_interval: u64,

    /// Termination status the target leaves on success (hex or decimal).
    #[clap(long, default_value = "0x00030009", value_parser = parse_u32)]
    pub expected_status: u32,

    /// Target variable holding the termination status.
    #[clap(long, default_value = "error_id", value_name = "NAME")]
    pub status_var: String,

    /// Target variable (expression) holding the measurement buffer address.
    #[clap(long, default_value = "&k2_stubborn_measures", value_name = "NAME")]
    pub buffer_var: String,

    /// Size of the measurement buffer, in bytes.
    #[clap(long, default_value_t = 1024 * 24)]
    pub buffer_size: usize,

    /// Additional symbol classified as an error-class stop (repeatable).
    #[clap(long = "error-symbol", value_name = "NAME")]
    pub error_symbols: Vec<String>,

    /// Reset the target after the control script completes.
    #[clap(long)]
    pub reset: bool,
}

impl CliOpts {
    /// Parses the CLI from the command-line.
    ///
    /// # Warning
    ///
    /// Exits on error: bad usage reports to stderr and exits with status 1,
    /// `--help`/`--version` report to stdout and exit with status 0.
    pub fn parse_from_cmdline() -> Self {
        match <Self as clap::Parser>::try_parse() {
            Ok(cli) => cli,
            Err(e) => {
                let use_stderr = e.use_stderr();
                let _ = e.print();
                std::process::exit(if use_stderr { 1 } else { 0 });
            }
        }
    }

    /// Connection parameters of the probe session.
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            node: self.node.clone(),
            port: self.port,
            packet_len: self.packet_len,
            ..ProbeConfig::default()
        }
    }

    /// Configuration of the harvest run.
    pub fn driver_config(&self) -> DriverConfig {
        let mut error_symbols: Vec<String> = sync::ERROR_ENTRY_SYMBOLS
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        error_symbols.extend(self.error_symbols.iter().cloned());

        DriverConfig {
            exec_poll: PollConfig {
                interval: Duration::from_secs(self.poll_interval),
                retry: RetryPolicy::default(),
            },
            script_poll: PollConfig {
                interval: Duration::from_secs(self.script_poll_interval),
                retry: RetryPolicy::default(),
            },
            error_symbols,
            outcome: OutcomeSpec {
                status_var: self.status_var.clone(),
                buffer_var: self.buffer_var.clone(),
                expected_status: self.expected_status,
                buffer_len: self.buffer_size,
            },
            reset_target: self.reset,
        }
    }
}

fn parse_u32(s: &str) -> Result<u32, String> {
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };

    u32::from_str_radix(digits, radix).map_err(|e| e.to_string())
}
