// Public modules
pub mod config;
pub mod error;
pub mod idutil;
pub mod negotiate;
pub mod validation;
pub mod version;

// Re-export common types for convenience
pub use config::AppConfig;
pub use error::{Error, ErrorCode, Result};
pub use validation::{FieldPath, MessageList};
