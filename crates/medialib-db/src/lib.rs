//! Metadata store for catalogued media files.

pub mod db;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use db::{escape_like, MediaFileRepository, MediaFileStore};
