pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use cli::{CliApp, run_ledger};
pub use config::AppConfig;
pub use error::AppError;
