//! Implements StorePort using a single JSON file.
//!
//! String key-value records (snapshot, transcript, theme) behind an in-memory
//! cache. Every mutation is flushed with a write-replace save.

use crate::domain::DomainError;
use crate::ports::StorePort;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Store contents: key -> raw value (use cases serialize records themselves).
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    entries: HashMap<String, String>,
}

/// JSON file-based key-value store.
pub struct JsonStore {
    path: std::path::PathBuf,
    cache: tokio::sync::RwLock<StoreData>,
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: tokio::sync::RwLock::new(StoreData::default()),
        }
    }

    /// Load store contents from disk. Call after construction. A missing or
    /// unreadable file loads as empty.
    pub async fn load(&self) -> Result<(), DomainError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
            Err(_) => StoreData::default(),
        };
        *self.cache.write().await = data;
        Ok(())
    }

    /// Atomic save using write-replace:
    /// 1. Write to temp file
    /// 2. sync_all() to ensure flush to disk
    /// 3. Atomic rename to target path
    async fn save(&self) -> Result<(), DomainError> {
        let data = self.cache.read().await;
        let json =
            serde_json::to_string_pretty(&*data).map_err(|e| DomainError::Store(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Store(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Store(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Store(format!("sync temp file: {}", e)))?;
        drop(f); // Close file handle before rename

        // On POSIX the rename replaces the target in one operation
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Store(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl StorePort for JsonStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let cache = self.cache.read().await;
        Ok(cache.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        {
            let mut cache = self.cache.write().await;
            cache.entries.insert(key.to_string(), value.to_string());
        }
        self.save().await
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        {
            let mut cache = self.cache.write().await;
            cache.entries.remove(key);
        }
        self.save().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("ciki-raino-{}-{}.json", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_set_get_remove_round_trip() {
        let path = temp_store_path("round-trip");
        let store = JsonStore::new(&path);
        store.load().await.unwrap();

        assert_eq!(store.get("theme").await.unwrap(), None);
        store.set("theme", "\"dark\"").await.unwrap();
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("\"dark\""));

        store.remove("theme").await.unwrap();
        assert_eq!(store.get("theme").await.unwrap(), None);
        // Removing again is a no-op, not an error.
        store.remove("theme").await.unwrap();

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_values_survive_reload_from_disk() {
        let path = temp_store_path("reload");
        {
            let store = JsonStore::new(&path);
            store.load().await.unwrap();
            store.set("pregnancy_tracking_data", "{}").await.unwrap();
        }

        let reopened = JsonStore::new(&path);
        reopened.load().await.unwrap();
        assert_eq!(
            reopened.get("pregnancy_tracking_data").await.unwrap().as_deref(),
            Some("{}")
        );

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let store = JsonStore::new(temp_store_path("does-not-exist"));
        store.load().await.unwrap();
        assert_eq!(store.get("anything").await.unwrap(), None);
    }
}
