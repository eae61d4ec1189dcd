use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// IO-level errors for reading and parsing command files
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV parsing error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid amount format: {0}")]
    InvalidAmount(String),

    #[error("Invalid account reference: {0}")]
    InvalidAccountRef(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
