//! medialib core library
//!
//! Domain models, error types, configuration and shared constants used by the storage,
//! database and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{BaseConfig, Config};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::{Bucket, StorageBackend};
