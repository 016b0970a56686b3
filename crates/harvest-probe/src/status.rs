/// Raw status code reported by a probe control operation.
///
/// The vocabulary is fixed by the remote API; only the codes the harness
/// needs to reason about are named here, everything else is carried opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(pub i32);

impl StatusCode {
    /// Operation completed.
    pub const OK: Self = Self(0);

    /// A message from the probe was lost or corrupted.
    pub const COM_RECEIVE_FAIL: Self = Self(-1);

    /// A message to the probe was lost or corrupted.
    pub const COM_TRANSMIT_FAIL: Self = Self(-2);

    /// Returns whether a retry of the failed operation may succeed.
    ///
    /// Exactly the two communication-failure codes are recoverable; any other
    /// failure indicates a state the harness cannot reason about and must not
    /// be masked by a retry.
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::COM_RECEIVE_FAIL | Self::COM_TRANSMIT_FAIL)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
