#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use harvest_probe::{DeviceKind, ExecState, ProbeControl, ScriptState, StatusCode};

use harvest_driver::Progress;

/// A transient communication failure, as the probe link reports it.
pub fn transient() -> harvest_probe::Error {
    harvest_probe::Error::Status(StatusCode::COM_RECEIVE_FAIL)
}

/// A non-transient probe failure with an arbitrary status code.
pub fn hard_failure() -> harvest_probe::Error {
    harvest_probe::Error::Status(StatusCode(-66))
}

/// Observable state of a [MockProbe], shared with the test body.
#[derive(Default)]
pub struct MockState {
    /// Scripted responses to execution-state queries; once drained, the
    /// probe keeps answering [MockState::idle_exec].
    pub exec_states: VecDeque<harvest_probe::Result<ExecState>>,

    /// Execution state reported once the script is drained.
    pub idle_exec: Option<ExecState>,

    /// Scripted responses to script-state queries; once drained, the probe
    /// answers `Finished`.
    pub script_states: VecDeque<harvest_probe::Result<ScriptState>>,

    /// Scripted responses to program-counter reads.
    pub pcs: VecDeque<harvest_probe::Result<u32>>,

    /// Scripted responses to symbol resolutions.
    pub symbols: VecDeque<harvest_probe::Result<String>>,

    /// Named target variables, as (low, high) halves.
    pub variables: HashMap<String, (u32, u32)>,

    /// Target memory regions keyed by base address.
    pub memory: HashMap<u32, Vec<u8>>,

    /// Every remote directive received, in order.
    pub commands: Vec<String>,

    /// Makes teardown itself report a probe failure.
    pub fail_close: bool,

    pub exec_queries: usize,
    pub resume_count: usize,
    pub close_count: usize,
}

/// Scripted probe transport for driving the harness in tests.
pub struct MockProbe {
    state: Rc<RefCell<MockState>>,
}

impl MockProbe {
    /// Creates a probe and a handle to its observable state.
    pub fn new() -> (Self, Rc<RefCell<MockState>>) {
        let state = Rc::new(RefCell::new(MockState::default()));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl ProbeControl for MockProbe {
    fn configure(&mut self, _key: &str, _value: &str) -> harvest_probe::Result<()> {
        Ok(())
    }

    fn init(&mut self) -> harvest_probe::Result<()> {
        Ok(())
    }

    fn attach(&mut self, _device: DeviceKind) -> harvest_probe::Result<()> {
        Ok(())
    }

    fn command(&mut self, text: &str) -> harvest_probe::Result<()> {
        self.state.borrow_mut().commands.push(text.to_owned());
        Ok(())
    }

    fn resume(&mut self) -> harvest_probe::Result<()> {
        self.state.borrow_mut().resume_count += 1;
        Ok(())
    }

    fn execution_state(&mut self) -> harvest_probe::Result<ExecState> {
        let mut state = self.state.borrow_mut();
        state.exec_queries += 1;

        match state.exec_states.pop_front() {
            Some(scripted) => scripted,
            None => Ok(state.idle_exec.unwrap_or(ExecState::Stopped)),
        }
    }

    fn script_state(&mut self) -> harvest_probe::Result<ScriptState> {
        let mut state = self.state.borrow_mut();

        match state.script_states.pop_front() {
            Some(scripted) => scripted,
            None => Ok(ScriptState::Finished),
        }
    }

    fn program_counter(&mut self) -> harvest_probe::Result<u32> {
        let mut state = self.state.borrow_mut();

        match state.pcs.pop_front() {
            Some(scripted) => scripted,
            None => Ok(0),
        }
    }

    fn symbol_at(&mut self, _addr: u32) -> harvest_probe::Result<String> {
        let mut state = self.state.borrow_mut();

        match state.symbols.pop_front() {
            Some(scripted) => scripted,
            None => Ok(String::new()),
        }
    }

    fn read_variable(&mut self, name: &str) -> harvest_probe::Result<(u32, u32)> {
        self.state
            .borrow()
            .variables
            .get(name)
            .copied()
            .ok_or_else(hard_failure)
    }

    fn read_memory(&mut self, addr: u32, len: usize) -> harvest_probe::Result<Vec<u8>> {
        let state = self.state.borrow();
        let region = state.memory.get(&addr).ok_or_else(hard_failure)?;

        Ok(region.iter().copied().take(len).collect())
    }

    fn close(&mut self) -> harvest_probe::Result<()> {
        let mut state = self.state.borrow_mut();
        state.close_count += 1;

        if state.fail_close {
            Err(hard_failure())
        } else {
            Ok(())
        }
    }
}

/// Progress sink counting the waiter's emissions.
#[derive(Debug, Default)]
pub struct CountingProgress {
    pub ticks: usize,
    pub dones: usize,
}

impl Progress for CountingProgress {
    fn tick(&mut self) {
        self.ticks += 1;
    }

    fn done(&mut self) {
        self.dones += 1;
    }
}
