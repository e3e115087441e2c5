/// Outcome of the most recent cloud key verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Unchecked,
    Checking,
    Connected,
    Failed,
}

impl ConnectionStatus {
    /// Returns whether a verification is in flight.
    #[must_use]
    pub const fn is_checking(self) -> bool {
        matches!(self, Self::Checking)
    }
}
