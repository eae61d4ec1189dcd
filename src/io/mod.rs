pub mod command;
pub mod csv_reader;
pub mod error;
pub mod parse;

// Re-export commonly used types
pub use command::{AccountRef, Command};
pub use csv_reader::CsvCommandStream;
pub use error::IoError;
pub use parse::RawCommandRecord;
