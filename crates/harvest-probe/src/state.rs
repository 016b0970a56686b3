use crate::Error;

/// Execution state of the debugged target.
///
/// Queried, never set directly; the only way to change it is through a
/// resume command or the target's own execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    /// The debug system is down.
    Down,

    /// The debug system is halted.
    Halted,

    /// The target is stopped (e.g., at a breakpoint).
    Stopped,

    /// The target is executing.
    Running,
}

impl ExecState {
    /// Decodes the raw state value reported by the probe.
    ///
    /// Values outside the documented vocabulary are decode errors, never a
    /// silent fallback.
    pub fn from_raw(raw: i32) -> crate::Result<Self> {
        match raw {
            0 => Ok(Self::Down),
            1 => Ok(Self::Halted),
            2 => Ok(Self::Stopped),
            3 => Ok(Self::Running),
            other => Err(Error::UnknownExecState(other)),
        }
    }
}

/// State of the remote script interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptState {
    /// No script is running.
    Finished,

    /// A script is still executing.
    Running,

    /// The interpreter opened a dialog and is blocked on interactive input.
    DialogOpen,
}

impl ScriptState {
    /// Decodes the raw interpreter state value reported by the probe.
    pub fn from_raw(raw: i32) -> crate::Result<Self> {
        match raw {
            0 => Ok(Self::Finished),
            1 => Ok(Self::Running),
            2 => Ok(Self::DialogOpen),
            other => Err(Error::UnknownScriptState(other)),
        }
    }
}

/// Physical debug interface a session attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceKind {
    /// The probe's host OS interface.
    Os,

    /// The debugger itself (`T32_DEV_ICD`/`T32_DEV_ICE`).
    #[default]
    Debugger,
}

impl DeviceKind {
    /// Raw device identifier used by the remote API.
    pub const fn raw(self) -> i32 {
        match self {
            Self::Os => 0,
            Self::Debugger => 1,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::{ExecState, ScriptState};
    use crate::Error;

    #[test]
    fn exec_state_decodes_the_documented_vocabulary() {
        assert!(matches!(ExecState::from_raw(0), Ok(ExecState::Down)));
        assert!(matches!(ExecState::from_raw(1), Ok(ExecState::Halted)));
        assert!(matches!(ExecState::from_raw(2), Ok(ExecState::Stopped)));
        assert!(matches!(ExecState::from_raw(3), Ok(ExecState::Running)));
    }

    #[test]
    fn exec_state_rejects_undocumented_values() {
        assert!(matches!(
            ExecState::from_raw(4),
            Err(Error::UnknownExecState(4))
        ));
        assert!(matches!(
            ExecState::from_raw(-1),
            Err(Error::UnknownExecState(-1))
        ));
    }

    #[test]
    fn script_state_rejects_undocumented_values() {
        assert!(matches!(
            ScriptState::from_raw(3),
            Err(Error::UnknownScriptState(3))
        ));
    }
}
