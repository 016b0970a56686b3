use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

extern "C" fn on_signal(signal: i32) {
    // async-signal-safe: a single atomic store
    harvest_driver::cancel::request_stop(signal);
}

/// Installs the interrupt-class signal handlers.
///
/// The handler never touches the probe session: it only records the stop
/// request, which the blocking waits observe at their next poll boundary and
/// turn into an ordinary error return. Teardown therefore always runs from
/// non-signal context, exactly once.
pub fn install() -> nix::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(on_signal),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );

    unsafe {
        signal::sigaction(Signal::SIGINT, &action)?;
        signal::sigaction(Signal::SIGTERM, &action)?;
    }

    Ok(())
}
