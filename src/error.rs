#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Withdrawal would leave the balance below zero.
    #[error("Insufficient Funds")]
    InsufficientFunds,
    #[error("account owner must not be empty")]
    EmptyOwner,
    #[error("no account at position {index}")]
    UnknownAccount { index: usize },
}
