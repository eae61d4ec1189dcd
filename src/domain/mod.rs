pub mod account;
pub mod account_type;
pub mod amount;
pub mod email;
pub mod error;
pub mod history;
pub mod operations;

// Re-export commonly used types
pub use account::Account;
pub use account_type::{AccountId, AccountType};
pub use amount::{AmountType, Cents, is_amount_valid};
pub use email::{Email, is_email_valid};
pub use error::DomainError;
pub use history::{HistoryEntry, OperationKind};
pub use operations::{apply_deposit, apply_transfer, apply_withdrawal};
