//! Database repositories
//!
//! `MediaFileStore` abstracts the metadata table so services can run against PostgreSQL in
//! production and an in-memory store in tests.

pub mod media_file;

pub use media_file::{escape_like, MediaFileRepository, MediaFileStore};
