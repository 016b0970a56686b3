use crate::StatusCode;

/// Error type of this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The probe reported a failure status.
    #[error("probe reported status {0}")]
    Status(StatusCode),

    /// The probe reported an execution state outside the documented
    /// vocabulary.
    #[error("unknown execution state {0}")]
    UnknownExecState(i32),

    /// The probe reported a script-interpreter state outside the documented
    /// vocabulary.
    #[error("unknown script interpreter state {0}")]
    UnknownScriptState(i32),

    /// A target variable did not fit the expected 32-bit width.
    #[error("variable `{name}` is wider than 32 bits")]
    VariableTooWide {
        /// Name of the offending variable.
        name: String,
    },

    /// A bulk-read length exceeds what the remote API can express.
    #[error("read length {0} exceeds the remote API limit")]
    ReadTooLarge(usize),

    /// An operation was attempted on a session that was already torn down.
    #[error("probe session is closed")]
    SessionClosed,

    /// A string argument cannot cross the FFI boundary.
    #[error("argument contains an interior NUL byte")]
    InvalidArgument(#[from] std::ffi::NulError),
}

impl Error {
    /// Returns the probe status code behind this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }

    /// Returns whether a retry of the failed operation may succeed.
    pub fn is_transient(&self) -> bool {
        self.status().is_some_and(StatusCode::is_transient)
    }
}

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;
