//! Object storage for media files and thumbnails.
//!
//! Two backends implement [`Storage`]: S3 (via `object_store`) and the local filesystem, where
//! this process serves HMAC-signed URLs itself.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod signing;
pub mod traits;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use medialib_core::{Bucket, StorageBackend};

#[cfg(feature = "storage-local")]
pub use factory::{create_local_files, LocalFiles};
pub use factory::{create_storage, StorageSet};
#[cfg(feature = "storage-local")]
pub use local::{ByteStream, LocalStorage};
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use signing::UrlSigner;
pub use traits::{Storage, StorageError, StorageResult};
