//! Probe transport backed by the TRACE32 `t32api` remote-control library.

mod sys;

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};

use crate::{DeviceKind, Error, ExecState, ProbeControl, ScriptState, StatusCode};
use crate::control::SYMBOL_NAME_MAX;

/// Probe transport over the vendor `t32api` library.
///
/// The library keeps the control channel in process-global state; create at
/// most one of these per process and hand it to
/// [Session::open](crate::Session::open).
#[derive(Debug, Default)]
pub struct T32Probe {
    _private: (),
}

impl T32Probe {
    /// Creates the transport. No communication happens until
    /// [init](ProbeControl::init).
    pub fn new() -> Self {
        Self::default()
    }
}

fn check(ret: c_int) -> crate::Result<()> {
    if ret == StatusCode::OK.0 {
        Ok(())
    } else {
        Err(Error::Status(StatusCode(ret)))
    }
}

impl ProbeControl for T32Probe {
    fn configure(&mut self, key: &str, value: &str) -> crate::Result<()> {
        let key = CString::new(key)?;
        let value = CString::new(value)?;
        check(unsafe { sys::T32_Config(key.as_ptr(), value.as_ptr()) })
    }

    fn init(&mut self) -> crate::Result<()> {
        check(unsafe { sys::T32_Init() })
    }

    fn attach(&mut self, device: DeviceKind) -> crate::Result<()> {
        check(unsafe { sys::T32_Attach(device.raw()) })
    }

    fn command(&mut self, text: &str) -> crate::Result<()> {
        let text = CString::new(text)?;
        check(unsafe { sys::T32_Cmd(text.as_ptr()) })
    }

    fn resume(&mut self) -> crate::Result<()> {
        check(unsafe { sys::T32_Go() })
    }

    fn execution_state(&mut self) -> crate::Result<ExecState> {
        let mut raw: c_int = 0;
        check(unsafe { sys::T32_GetState(&mut raw) })?;
        ExecState::from_raw(raw)
    }

    fn script_state(&mut self) -> crate::Result<ScriptState> {
        let mut raw: c_int = 0;
        check(unsafe { sys::T32_GetPracticeState(&mut raw) })?;
        ScriptState::from_raw(raw)
    }

    fn program_counter(&mut self) -> crate::Result<u32> {
        let mut pp: u32 = 0;
        check(unsafe { sys::T32_ReadPP(&mut pp) })?;
        Ok(pp)
    }

    fn symbol_at(&mut self, addr: u32) -> crate::Result<String> {
        let mut buf = [0u8; SYMBOL_NAME_MAX];

        check(unsafe {
            sys::T32_GetSymbolFromAddress(buf.as_mut_ptr().cast::<c_char>(), addr, buf.len() as c_int)
        })?;

        // The library NUL-terminates within the bound it was given.
        let name = CStr::from_bytes_until_nul(&buf)
            .map(CStr::to_bytes)
            .unwrap_or(&buf);

        Ok(String::from_utf8_lossy(name).into_owned())
    }

    fn read_variable(&mut self, name: &str) -> crate::Result<(u32, u32)> {
        let name = CString::new(name)?;
        let mut low: u32 = 0;
        let mut high: u32 = 0;
        check(unsafe { sys::T32_ReadVariableValue(name.as_ptr(), &mut low, &mut high) })?;
        Ok((low, high))
    }

    fn read_memory(&mut self, addr: u32, len: usize) -> crate::Result<Vec<u8>> {
        // reject before allocating: the remote API sizes reads with a c_int
        let size = c_int::try_from(len).map_err(|_| Error::ReadTooLarge(len))?;

        let mut buf = vec![0u8; len];
        check(unsafe { sys::T32_ReadMemory(addr, 0x0, buf.as_mut_ptr(), size) })?;
        Ok(buf)
    }

    fn close(&mut self) -> crate::Result<()> {
        check(unsafe { sys::T32_Exit() })
    }
}
