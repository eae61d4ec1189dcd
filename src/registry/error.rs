use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// Registry-level errors for account lookup and routing
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RegistryError {
    /// The underlying business rule violation, if any
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}
