//! JSON encode/decode over a [`KeyValueStore`], with fallback-on-failure reads.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::repository::{KeyValueStore, StorageError};

/// Typed view over the raw store. Every feature reads and writes through this.
///
/// Clones share one write lock; [`Persistence::update`] holds it across its
/// read and write.
#[derive(Clone)]
pub struct Persistence {
    kv: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl Persistence {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Decoded value for `key`, or `fallback`.
    ///
    /// The fallback is returned when the key is absent, holds JSON `null`,
    /// cannot be decoded as `T`, or when the backend read fails. This never
    /// returns an error, so it is only for display reads.
    pub async fn get<T: DeserializeOwned>(&self, key: impl AsRef<str>, fallback: T) -> T {
        let key = key.as_ref();
        match self.read(key).await {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!(key, error = %err, "store read failed, using fallback");
                fallback
            }
        }
    }

    /// Like [`Persistence::get`], but a failing backend is an error.
    ///
    /// Absent, `null` and undecodable values still yield `fallback`.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the read fails.
    pub async fn try_get<T: DeserializeOwned>(
        &self,
        key: impl AsRef<str>,
        fallback: T,
    ) -> Result<T, StorageError> {
        Ok(self.read(key.as_ref()).await?.unwrap_or(fallback))
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.kv.get_raw(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Null) => Ok(None),
            Ok(value) => match serde_json::from_value(value) {
                Ok(decoded) => Ok(Some(decoded)),
                Err(err) => {
                    tracing::debug!(key, error = %err, "stored value has unexpected shape");
                    Ok(None)
                }
            },
            Err(err) => {
                tracing::debug!(key, error = %err, "stored value is not JSON");
                Ok(None)
            }
        }
    }

    /// Read `key` strictly, let `apply` change it, then write it back.
    ///
    /// The whole cycle runs under the shared write lock. Nothing is written
    /// when the read fails or `apply` returns an error.
    ///
    /// # Errors
    ///
    /// Returns the backend error of the read or write, or the error of
    /// `apply`.
    pub async fn update<T, R, E>(
        &self,
        key: impl AsRef<str>,
        fallback: T,
        apply: impl FnOnce(&mut T) -> Result<R, E>,
    ) -> Result<R, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<StorageError>,
    {
        let key = key.as_ref();
        let _guard = self.write_lock.lock().await;
        let mut value = self.try_get(key, fallback).await?;
        let out = apply(&mut value)?;
        self.set(key, &value).await?;
        Ok(out)
    }

    /// Encode `value` as JSON and store it under `key`, overwriting.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if `value` cannot be encoded, or a
    /// backend error if the write fails.
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        key: impl AsRef<str>,
        value: &T,
    ) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.kv.set_raw(key.as_ref(), encoded).await
    }

    /// Remove `key`. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the delete fails.
    pub async fn delete(&self, key: impl AsRef<str>) -> Result<(), StorageError> {
        self.kv.remove(key.as_ref()).await
    }
}
