//! Credential persistence.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use pagechat_core::ApiKey;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Persistence for the single user credential.
///
/// Loaded once at engine startup, overwritten on user edit, never cleared
/// automatically.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the stored key, if any.
    async fn load(&self) -> Result<Option<ApiKey>, StoreError>;

    /// Persist the key, overwriting any previous value.
    async fn save(&self, key: &ApiKey) -> Result<(), StoreError>;
}

#[derive(Serialize, Deserialize)]
struct StoredCredential {
    api_key: String,
}

/// JSON file store holding the credential under its fixed key name.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<ApiKey>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let stored: StoredCredential = serde_json::from_str(&contents)?;
                Ok(ApiKey::new(stored.api_key))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &ApiKey) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let stored = StoredCredential {
            api_key: key.as_str().to_string(),
        };
        let contents = serde_json::to_string_pretty(&stored)?;
        tokio::fs::write(&self.path, contents).await?;
        debug!(path = %self.path.display(), "credential saved");
        Ok(())
    }
}

/// In-process store for tests and embedders without a filesystem.
#[derive(Default)]
pub struct MemoryCredentialStore {
    key: Mutex<Option<ApiKey>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<ApiKey>, StoreError> {
        let key = self.key.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(key.clone())
    }

    async fn save(&self, key: &ApiKey) -> Result<(), StoreError> {
        let mut slot = self.key.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(key.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        assert!(store.load().await.unwrap().is_none());

        let key = ApiKey::new("sk-round-trip").unwrap();
        store.save(&key).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.as_str(), "sk-round-trip");
    }

    #[tokio::test]
    async fn test_file_store_overwrites_previous_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        store.save(&ApiKey::new("sk-old").unwrap()).await.unwrap();
        store.save(&ApiKey::new("sk-new").unwrap()).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.as_str(), "sk-new");
    }

    #[tokio::test]
    async fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("config").join("credentials.json");
        let store = FileCredentialStore::new(&nested);

        store.save(&ApiKey::new("sk-nested").unwrap()).await.unwrap();
        assert!(nested.exists());
    }

    #[tokio::test]
    async fn test_file_store_empty_key_on_disk_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        tokio::fs::write(&path, r#"{"api_key": ""}"#).await.unwrap();

        let store = FileCredentialStore::new(&path);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert!(store.load().await.unwrap().is_none());

        store.save(&ApiKey::new("sk-mem").unwrap()).await.unwrap();
        assert_eq!(store.load().await.unwrap().unwrap().as_str(), "sk-mem");
    }
}
