pub mod history;
pub mod traits;

// Re-export commonly used types
pub use history::{InMemoryHistory, NoHistory};
pub use traits::HistoryRecorder;
