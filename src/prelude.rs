//! Prelude module for convenient imports
//!
//! Import everything you need with: `use dragon_bank::prelude::*;`

// Domain types
pub use crate::domain::{
    Account, AccountId, AccountType, AmountType, Cents, DomainError, Email, HistoryEntry,
    OperationKind, is_amount_valid, is_email_valid,
};

// Storage types
pub use crate::storage::{HistoryRecorder, InMemoryHistory, NoHistory};

// Registry types
pub use crate::registry::{CentralBank, RegistryError};

// Engine types
pub use crate::engine::CommandProcessor;

// IO types
pub use crate::io::{AccountRef, Command, CsvCommandStream, IoError, RawCommandRecord};

// Streaming types
pub use crate::streaming::{
    AbortOnError, ErrorPolicy, ProcessingReport, ProcessingSession, SilentSkip, SkipErrors,
};

// App types
pub use crate::app::{AppConfig, AppError, CliApp, run_ledger};
