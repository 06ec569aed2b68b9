//! HMAC-signed URLs for the local filesystem backend.
//!
//! Signature = hex(HMAC-SHA256(secret, "{METHOD}\n{bucket}\n{key}\n{expires}")), where
//! `expires` is a unix timestamp in seconds. The method and bucket are part of the payload so a
//! download link cannot be replayed as an upload, or against the other bucket.

use crate::traits::{StorageError, StorageResult};
use hmac::{Hmac, Mac};
use http::Method;
use medialib_core::Bucket;
use sha2::Sha256;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies URLs handed out for local objects
#[derive(Clone)]
pub struct UrlSigner {
    secret: Arc<[u8]>,
}

impl std::fmt::Debug for UrlSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlSigner").finish_non_exhaustive()
    }
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

impl UrlSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: Arc::from(secret.as_ref()),
        }
    }

    fn mac(
        &self,
        method: &Method,
        bucket: Bucket,
        key: &str,
        expires_at: u64,
    ) -> StorageResult<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| StorageError::ConfigError(format!("Invalid signing secret: {}", e)))?;
        mac.update(method.as_str().as_bytes());
        mac.update(b"\n");
        mac.update(bucket.as_str().as_bytes());
        mac.update(b"\n");
        mac.update(key.as_bytes());
        mac.update(b"\n");
        mac.update(expires_at.to_string().as_bytes());
        Ok(mac)
    }

    /// Hex signature for a request that is valid until `expires_at`.
    pub fn sign(
        &self,
        method: &Method,
        bucket: Bucket,
        key: &str,
        expires_at: u64,
    ) -> StorageResult<String> {
        let mac = self.mac(method, bucket, key, expires_at)?;
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Expiry timestamp for a URL issued now with the given lifetime.
    pub fn expiry_from_now(expires_in: Duration) -> u64 {
        unix_now().saturating_add(expires_in.as_secs())
    }

    /// Check a signature presented with a request.
    pub fn verify(
        &self,
        method: &Method,
        bucket: Bucket,
        key: &str,
        expires_at: u64,
        signature: &str,
    ) -> StorageResult<()> {
        if unix_now() > expires_at {
            return Err(StorageError::SignatureRejected(
                "Signed URL has expired".to_string(),
            ));
        }

        let tag = hex::decode(signature)
            .map_err(|_| StorageError::SignatureRejected("Invalid signature".to_string()))?;
        self.mac(method, bucket, key, expires_at)?
            .verify_slice(&tag)
            .map_err(|_| StorageError::SignatureRejected("Invalid signature".to_string()))
    }
}
