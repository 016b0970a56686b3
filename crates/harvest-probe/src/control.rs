use crate::{DeviceKind, ExecState, ScriptState};

/// Upper bound on a resolved symbol name, in bytes.
///
/// Resolution results longer than this are truncated by the implementor.
pub const SYMBOL_NAME_MAX: usize = 0xfc;

/// Trait implementing the control channel to a debug probe.
///
/// Implementors map each operation onto the underlying transport and report
/// failures as [Error::Status](crate::Error::Status) carrying the probe's
/// status code. The harness never talks to a transport directly; it goes
/// through a [Session](crate::Session) wrapping one of these.
pub trait ProbeControl {
    /// Sets a named connection parameter.
    ///
    /// Only meaningful before [init](Self::init).
    fn configure(&mut self, key: &str, value: &str) -> crate::Result<()>;

    /// Establishes the local control channel to the probe.
    fn init(&mut self) -> crate::Result<()>;

    /// Binds the session to a physical debug interface.
    fn attach(&mut self, device: DeviceKind) -> crate::Result<()>;

    /// Sends one remote directive to the probe.
    fn command(&mut self, text: &str) -> crate::Result<()>;

    /// Requests the target to continue execution.
    fn resume(&mut self) -> crate::Result<()>;

    /// Queries the target's execution state.
    fn execution_state(&mut self) -> crate::Result<ExecState>;

    /// Queries the state of the remote script interpreter.
    fn script_state(&mut self) -> crate::Result<ScriptState>;

    /// Reads the current program counter of the target.
    fn program_counter(&mut self) -> crate::Result<u32>;

    /// Best-effort resolution of an address to a symbol name.
    ///
    /// The result is truncated to [SYMBOL_NAME_MAX] bytes. Callers must
    /// treat an empty or meaningless name as resolvable-to-nothing, not as a
    /// fatal condition.
    fn symbol_at(&mut self, addr: u32) -> crate::Result<String>;

    /// Reads a named target variable as (low, high) 32-bit halves.
    fn read_variable(&mut self, name: &str) -> crate::Result<(u32, u32)>;

    /// Bulk-reads `len` bytes from the target's memory.
    fn read_memory(&mut self, addr: u32, len: usize) -> crate::Result<Vec<u8>>;

    /// Releases the control channel.
    fn close(&mut self) -> crate::Result<()>;
}
