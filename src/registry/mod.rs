pub mod bank;
pub mod error;

// Re-export commonly used types
pub use bank::CentralBank;
pub use error::RegistryError;
