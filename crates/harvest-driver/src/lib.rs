//! This crate drives a remote embedded target, through a debug probe, to the
//! point where its results can be harvested.
//!
//! The flow it implements is entirely synchronous and breakpoint-delimited:
//!
//! 1. Load a control script onto the remote debugger and wait for the script
//!    interpreter to finish ([script]).
//! 2. Repeatedly resume the target and wait for it to stop, classifying each
//!    stop by the symbol resolved at the halt address, until a designated
//!    diagnostic entry point is reached ([sync]).
//! 3. Validate the termination status word left in target memory and read
//!    back a fixed-size result buffer ([extract]).
//!
//! State queries go through a bounded [retry] layer: real probe links drop
//! packets, and the two transmit/receive failure codes are the only ones
//! known to be recoverable. Every wait is a fixed-interval busy-poll with no
//! timeout; the only escape from a target that never stops is a recorded
//! stop request ([cancel]), observed at poll boundaries.
//!
//! [Driver] ties the steps together over an owned probe
//! [Session](harvest_probe::Session), which is torn down exactly once on
//! every exit path.

pub mod cancel;
mod error;
pub mod extract;
pub mod progress;
pub mod retry;
mod run;
pub mod script;
pub mod sync;
pub mod wait;

pub use self::error::{Error, Result};
pub use self::extract::{Outcome, OutcomeSpec};
pub use self::progress::Progress;
pub use self::retry::RetryPolicy;
pub use self::run::{Driver, DriverConfig};
pub use self::wait::PollConfig;
