//! In-memory storage double for unit and handler tests.

use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use medialib_core::Bucket;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fake bucket that hands out predictable URLs and records deletions.
#[derive(Clone)]
pub struct MemoryStorage {
    bucket: Bucket,
    objects: Arc<Mutex<HashSet<String>>>,
    deleted: Arc<Mutex<Vec<String>>>,
    fail_deletes: Arc<Mutex<bool>>,
    fail_signing: Arc<Mutex<bool>>,
}

impl MemoryStorage {
    pub fn new(bucket: Bucket) -> Self {
        Self {
            bucket,
            objects: Arc::new(Mutex::new(HashSet::new())),
            deleted: Arc::new(Mutex::new(Vec::new())),
            fail_deletes: Arc::new(Mutex::new(false)),
            fail_signing: Arc::new(Mutex::new(false)),
        }
    }

    /// Pretend a client already uploaded `key`.
    pub fn put_object(&self, key: &str) {
        self.objects.lock().unwrap().insert(key.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains(key)
    }

    /// Keys passed to `delete`, in call order.
    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn fail_deletes(&self, fail: bool) {
        *self.fail_deletes.lock().unwrap() = fail;
    }

    pub fn fail_signing(&self, fail: bool) {
        *self.fail_signing.lock().unwrap() = fail;
    }

    fn url(&self, method: &str, key: &str, expires_in: Duration) -> StorageResult<String> {
        if *self.fail_signing.lock().unwrap() {
            return Err(StorageError::BackendError("signing unavailable".to_string()));
        }
        Ok(format!(
            "https://storage.test/{}/{}?method={}&expires_in={}",
            self.bucket,
            key,
            method,
            expires_in.as_secs()
        ))
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn presigned_put_url(
        &self,
        storage_key: &str,
        _content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        self.url("PUT", storage_key, expires_in)
    }

    async fn get_presigned_url(
        &self,
        storage_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        self.url("GET", storage_key, expires_in)
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        if *self.fail_deletes.lock().unwrap() {
            return Err(StorageError::DeleteFailed(format!(
                "injected failure for {}",
                storage_key
            )));
        }
        self.deleted.lock().unwrap().push(storage_key.to_string());
        self.objects.lock().unwrap().remove(storage_key);
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
