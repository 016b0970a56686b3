use crate::{DeviceKind, Error, ExecState, ProbeControl, ScriptState};

/// Connection parameters of a probe session.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Host running the probe control software.
    pub node: String,

    /// UDP/TCP port of the control channel.
    pub port: u16,

    /// Maximum packet length on the control channel, in bytes.
    pub packet_len: u16,

    /// Debug interface to attach to.
    pub device: DeviceKind,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            node: "localhost".to_owned(),
            port: 20000,
            packet_len: 1024,
            device: DeviceKind::Debugger,
        }
    }
}

/// An open session over a debug probe.
///
/// The session is exclusively owned: it is created by [open](Self::open)
/// (configure + init + attach) and torn down exactly once, either through
/// [close](Self::close) or on drop. Operations on a closed session fail with
/// [Error::SessionClosed].
///
/// # Note
///
/// The underlying remote API maintains process-global channel state, so at
/// most one session should exist per process lifetime.
pub struct Session<P: ProbeControl> {
    probe: P,
    closed: bool,
}

impl<P: ProbeControl> Session<P> {
    /// Opens a session: sets the connection parameters, establishes the
    /// control channel, and attaches to the configured debug interface.
    ///
    /// Any rejected parameter or failed step is fatal to the caller; no
    /// partial session is returned.
    pub fn open(mut probe: P, config: &ProbeConfig) -> crate::Result<Self> {
        probe.configure("NODE=", &config.node)?;
        probe.configure("PACKLEN=", &config.packet_len.to_string())?;
        probe.configure("PORT=", &config.port.to_string())?;

        probe.init()?;
        probe.attach(config.device)?;

        tracing::info!(
            node = %config.node,
            port = config.port,
            device = ?config.device,
            "probe session attached"
        );

        Ok(Self {
            probe,
            closed: false,
        })
    }

    /// Sends one remote directive to the probe.
    pub fn command(&mut self, text: &str) -> crate::Result<()> {
        self.open_probe()?.command(text)
    }

    /// Requests the target to continue execution.
    pub fn resume(&mut self) -> crate::Result<()> {
        self.open_probe()?.resume()
    }

    /// Queries the target's execution state.
    pub fn execution_state(&mut self) -> crate::Result<ExecState> {
        self.open_probe()?.execution_state()
    }

    /// Queries the state of the remote script interpreter.
    pub fn script_state(&mut self) -> crate::Result<ScriptState> {
        self.open_probe()?.script_state()
    }

    /// Reads the current program counter of the target.
    pub fn program_counter(&mut self) -> crate::Result<u32> {
        self.open_probe()?.program_counter()
    }

    /// Best-effort resolution of an address to a symbol name.
    pub fn symbol_at(&mut self, addr: u32) -> crate::Result<String> {
        self.open_probe()?.symbol_at(addr)
    }

    /// Reads a named 32-bit target variable.
    ///
    /// Fails with [Error::VariableTooWide] if the variable carries bits in
    /// its high 32-bit half.
    pub fn read_u32(&mut self, name: &str) -> crate::Result<u32> {
        let (low, high) = self.open_probe()?.read_variable(name)?;

        if high != 0 {
            return Err(Error::VariableTooWide {
                name: name.to_owned(),
            });
        }

        Ok(low)
    }

    /// Bulk-reads `len` bytes from the target's memory.
    pub fn read_memory(&mut self, addr: u32, len: usize) -> crate::Result<Vec<u8>> {
        self.open_probe()?.read_memory(addr, len)
    }

    /// Tears the session down.
    ///
    /// Idempotent: a second call is a no-op reporting success. The session
    /// is considered closed even if the underlying release fails.
    pub fn close(&mut self) -> crate::Result<()> {
        if self.closed {
            return Ok(());
        }

        self.closed = true;
        self.probe.close()
    }

    fn open_probe(&mut self) -> crate::Result<&mut P> {
        if self.closed {
            Err(Error::SessionClosed)
        } else {
            Ok(&mut self.probe)
        }
    }
}

impl<P: ProbeControl> Drop for Session<P> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }

        self.closed = true;
        if let Err(e) = self.probe.close() {
            tracing::warn!(error = %e, "probe teardown failed");
        }
    }
}
