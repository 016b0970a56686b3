//! Raw declarations of the subset of the `t32api` remote-control library the
//! harness uses.

use std::os::raw::{c_char, c_int};

#[link(name = "t32api")]
unsafe extern "C" {
    pub fn T32_Config(key: *const c_char, value: *const c_char) -> c_int;
    pub fn T32_Init() -> c_int;
    pub fn T32_Attach(device: c_int) -> c_int;
    pub fn T32_Exit() -> c_int;

    pub fn T32_Cmd(command: *const c_char) -> c_int;
    pub fn T32_Go() -> c_int;

    pub fn T32_GetState(state: *mut c_int) -> c_int;
    pub fn T32_GetPracticeState(state: *mut c_int) -> c_int;

    pub fn T32_ReadPP(pp: *mut u32) -> c_int;
    pub fn T32_GetSymbolFromAddress(symbol: *mut c_char, addr: u32, size: c_int) -> c_int;
    pub fn T32_ReadVariableValue(name: *const c_char, low: *mut u32, high: *mut u32) -> c_int;
    pub fn T32_ReadMemory(addr: u32, access: c_int, buffer: *mut u8, size: c_int) -> c_int;
}
