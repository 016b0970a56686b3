#![allow(missing_docs)]
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

mod cli;
mod progress;
mod signal;

use miette::IntoDiagnostic;

use harvest_driver::Driver;
use harvest_probe::ProbeControl;

use tracing_subscriber::EnvFilter;

use crate::cli::CliOpts;
use crate::progress::DotProgress;

fn main() {
    let cli = CliOpts::parse_from_cmdline();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_env_var("HARVEST_LOG")
                .from_env_lossy(),
        )
        .init();

    if let Err(e) = signal::install().into_diagnostic() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }

    #[cfg(feature = "t32")]
    match run(harvest_probe::t32::T32Probe::new(), cli) {
        Ok(()) => {}
        Err(e) => {
            // compute the exit code after the probe session was released
            let code = e.exit_code();
            report(&e);
            std::process::exit(code);
        }
    }

    #[cfg(not(feature = "t32"))]
    {
        let _ = cli;
        eprintln!("*** this binary was built without a probe backend; rebuild with `--features t32`");
        std::process::exit(1);
    }
}

#[cfg_attr(not(feature = "t32"), allow(dead_code))]
fn run<P: ProbeControl>(probe: P, cli: CliOpts) -> Result<(), harvest_driver::Error> {
    let mut driver = Driver::open(probe, &cli.probe_config(), cli.driver_config())?;

    let outcome = driver.run_and_dump(&cli.script, &cli.output, &mut DotProgress)?;

    println!(
        "{} bytes dumped to `{}`",
        outcome.data.len(),
        cli.output.display()
    );

    driver.finish()
}

#[cfg_attr(not(feature = "t32"), allow(dead_code))]
fn report(error: &dyn std::error::Error) {
    eprintln!("*** {error}");

    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("*** caused by: {cause}");
        source = cause.source();
    }
}
