//! Songstash core library
//!
//! Shared configuration and error types used by the storage and API crates.

pub mod config;
pub mod error;
pub mod storage_types;

pub use config::Config;
pub use error::{AppError, LogLevel};
pub use storage_types::StorageBackend;
