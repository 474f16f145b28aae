//! In-memory StorePort for tests and dry runs. Nothing touches disk.

use crate::domain::DomainError;
use crate::ports::StorePort;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Volatile key-value store. Same contract as JsonStore minus persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StorePort for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
