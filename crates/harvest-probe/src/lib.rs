//! This crate provides the probe-control capability consumed by
//! `harvest-driver`.
//!
//! The capability is expressed as the [ProbeControl] trait: a small vocabulary
//! of remote operations (configuration, attach, command execution, state
//! queries, memory and variable reads) that all report failures through a
//! probe [StatusCode]. The [Session] type wraps an implementor and owns the
//! connection lifecycle: it is created by `configure` + `init` + `attach`, and
//! torn down exactly once, either explicitly or on drop.
//!
//! The default implementor binds the TRACE32 `t32api` remote-control library
//! and lives behind the `t32` cargo feature (the vendor library cannot be
//! redistributed). Alternative transports only need to implement
//! [ProbeControl].

mod control;
mod error;
mod session;
mod state;
mod status;

#[cfg(feature = "t32")]
pub mod t32;

pub use self::control::{ProbeControl, SYMBOL_NAME_MAX};
pub use self::error::{Error, Result};
pub use self::session::{ProbeConfig, Session};
pub use self::state::{DeviceKind, ExecState, ScriptState};
pub use self::status::StatusCode;
