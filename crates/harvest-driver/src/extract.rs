//! Validation and extraction of the in-target outcome record.

use std::io::Write;
use std::path::Path;

use harvest_probe::{ProbeControl, Session};

use crate::Error;

/// Target memory contract of the outcome record.
#[derive(Debug, Clone)]
pub struct OutcomeSpec {
    /// Variable holding the 32-bit termination status.
    pub status_var: String,

    /// Variable (expression) holding the address of the result buffer.
    ///
    /// Pointer-to-buffer convention: the variable's value is the address to
    /// bulk-read from, not the data itself.
    pub buffer_var: String,

    /// Status value the target leaves on successful termination.
    pub expected_status: u32,

    /// Exact size of the result buffer, in bytes.
    pub buffer_len: usize,
}

impl Default for OutcomeSpec {
    fn default() -> Self {
        Self {
            status_var: "error_id".to_owned(),
            buffer_var: "&k2_stubborn_measures".to_owned(),
            expected_status: 0x0003_0009,
            // 1024 records of 24 bytes each.
            buffer_len: 1024 * 24,
        }
    }
}

/// Outcome record extracted from the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Termination status read from the status variable.
    pub status: u32,

    /// Target address the result buffer was read from.
    pub buffer_addr: u32,

    /// The result buffer itself, exactly `buffer_len` bytes.
    pub data: Vec<u8>,
}

impl Outcome {
    /// Persists the result buffer to `path` as a raw binary dump.
    ///
    /// The file is created (or truncated) and written in one operation; an
    /// open failure or short write is fatal with the underlying I/O error,
    /// and never reported as success.
    pub fn write_to(&self, path: &Path) -> crate::Result<()> {
        let dump = |path: &Path| -> std::io::Result<()> {
            let mut file = std::fs::File::create(path)?;
            file.write_all(&self.data)
        };

        dump(path).map_err(|source| Error::Dump {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            bytes = self.data.len(),
            path = %path.display(),
            "outcome dump written"
        );

        Ok(())
    }
}

/// Validates the termination status and reads the outcome record back.
///
/// The status variable is checked against the expected sentinel first; a
/// mismatch is fatal, reported with both values, and nothing is read or
/// written past that point. On a match, the buffer address is read from the
/// second variable and exactly [buffer_len](OutcomeSpec::buffer_len) bytes
/// are bulk-read from it.
pub fn read_outcome<P: ProbeControl>(
    session: &mut Session<P>,
    spec: &OutcomeSpec,
) -> crate::Result<Outcome> {
    let status = read_u32(session, &spec.status_var)?;

    if status != spec.expected_status {
        return Err(Error::StatusMismatch {
            expected: spec.expected_status,
            actual: status,
        });
    }

    let buffer_addr = read_u32(session, &spec.buffer_var)?;

    tracing::info!(
        status = format_args!("{status:#010x}"),
        addr = format_args!("{buffer_addr:#010x}"),
        len = spec.buffer_len,
        "termination status validated, reading result buffer"
    );

    let data = session
        .read_memory(buffer_addr, spec.buffer_len)
        .map_err(|source| Error::MemoryRead {
            addr: buffer_addr,
            len: spec.buffer_len,
            source,
        })?;

    if data.len() != spec.buffer_len {
        return Err(Error::ShortRead {
            addr: buffer_addr,
            got: data.len(),
            want: spec.buffer_len,
        });
    }

    Ok(Outcome {
        status,
        buffer_addr,
        data,
    })
}

fn read_u32<P: ProbeControl>(session: &mut Session<P>, name: &str) -> crate::Result<u32> {
    session.read_u32(name).map_err(|source| Error::Variable {
        name: name.to_owned(),
        source,
    })
}
