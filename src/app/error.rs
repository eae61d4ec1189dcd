use thiserror::Error;

use crate::io::IoError;
use crate::registry::RegistryError;

/// Errors that end a ledger run
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Command file error: {0}")]
    CommandFile(#[from] IoError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Processing aborted after {applied} applied command(s)")]
    Aborted { applied: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aborted_reports_applied_count() {
        assert_eq!(
            AppError::Aborted { applied: 3 }.to_string(),
            "Processing aborted after 3 applied command(s)"
        );
    }

    #[test]
    fn command_file_errors_keep_their_cause() {
        let err = AppError::from(IoError::InvalidAccountRef("9X".to_string()));
        assert_eq!(
            err.to_string(),
            "Command file error: Invalid account reference: 9X"
        );
    }

    #[test]
    fn registry_error_conversion() {
        match AppError::from(RegistryError::AccountNotFound("1C".to_string())) {
            AppError::Registry(RegistryError::AccountNotFound(id)) => assert_eq!(id, "1C"),
            other => panic!("Expected Registry error variant, got {other:?}"),
        }
    }
}
