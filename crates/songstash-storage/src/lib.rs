//! Songstash storage library
//!
//! Storage gateway for the song library: the [`Storage`] trait plus S3 and
//! local filesystem implementations.
//!
//! # Key layout
//!
//! Audio objects live under `song/<filename>.<ext>` and cover art under
//! `images/<basename>.jpg`. The association between the two is purely
//! name-derived; nothing verifies that an image exists for a given song.
//! Keys must not contain `..` or a leading `/`.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use songstash_core::StorageBackend;
pub use traits::{ObjectInfo, Storage, StorageError, StorageResult};
