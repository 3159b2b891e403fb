//! S3-compatible object storage client for site media.

pub mod client;
pub mod error;

pub use client::{MediaStorage, StorageConfig, UploadedObject};
pub use error::{StorageError, StorageResult};
