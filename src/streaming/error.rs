use tracing::{error, warn};

use crate::io::IoError;
use crate::registry::RegistryError;

/// Policy for handling errors during command processing
pub trait ErrorPolicy: Send + Sync {
    /// Handle an IO error (CSV parsing, reading)
    /// Return true to continue processing, false to abort
    fn handle_io_error(&self, error: IoError) -> bool;

    /// Handle a rejected command
    /// Return true to continue processing, false to abort
    fn handle_command_error(&self, error: RegistryError) -> bool;
}

// Lets the policy be chosen at runtime from configuration
impl<P: ErrorPolicy + ?Sized> ErrorPolicy for Box<P> {
    fn handle_io_error(&self, error: IoError) -> bool {
        (**self).handle_io_error(error)
    }

    fn handle_command_error(&self, error: RegistryError) -> bool {
        (**self).handle_command_error(error)
    }
}

/// Skip errors and continue processing, logging each one
pub struct SkipErrors;

impl ErrorPolicy for SkipErrors {
    fn handle_io_error(&self, error: IoError) -> bool {
        warn!(%error, "Skipping unreadable command");
        true
    }

    fn handle_command_error(&self, error: RegistryError) -> bool {
        warn!(%error, "Skipping rejected command");
        true
    }
}

/// Abort on first error
pub struct AbortOnError;

impl ErrorPolicy for AbortOnError {
    fn handle_io_error(&self, error: IoError) -> bool {
        error!(%error, "Aborting on unreadable command");
        false
    }

    fn handle_command_error(&self, error: RegistryError) -> bool {
        error!(%error, "Aborting on rejected command");
        false
    }
}

/// Silent error policy - skip errors without logging
pub struct SilentSkip;

impl ErrorPolicy for SilentSkip {
    fn handle_io_error(&self, _error: IoError) -> bool {
        true
    }

    fn handle_command_error(&self, _error: RegistryError) -> bool {
        true
    }
}
