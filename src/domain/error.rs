use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Cannot transfer to the same account")]
    SameAccount,

    #[error("Invalid account type: {0:?}")]
    InvalidAccountType(String),

    #[error("Arithmetic overflow")]
    Overflow,
}
