//! Songstash API library
//!
//! HTTP handlers, error mapping, and application setup for the song
//! library backend.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;

// Re-exports
pub use error::ErrorResponse;
pub use state::{AppState, LibraryConfig};
