//! User preferences: theme persisted across sessions.

use crate::domain::{DomainError, Theme};
use crate::ports::StorePort;
use std::sync::Arc;
use tracing::info;

const THEME_KEY: &str = "theme";

/// Preferences service. Thin wrapper over the store.
pub struct PrefsService {
    store: Arc<dyn StorePort>,
}

impl PrefsService {
    pub fn new(store: Arc<dyn StorePort>) -> Self {
        Self { store }
    }

    /// Current theme; light when unset or unreadable.
    pub async fn theme(&self) -> Result<Theme, DomainError> {
        let raw = self.store.get(THEME_KEY).await?;
        Ok(raw
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default())
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub async fn toggle_theme(&self) -> Result<Theme, DomainError> {
        let next = self.theme().await?.toggled();
        let json = serde_json::to_string(&next).map_err(|e| DomainError::Store(e.to_string()))?;
        self.store.set(THEME_KEY, &json).await?;
        info!(theme = ?next, "theme toggled");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::MemoryStore;

    #[tokio::test]
    async fn test_defaults_to_light_and_toggles() {
        let svc = PrefsService::new(Arc::new(MemoryStore::new()));
        assert_eq!(svc.theme().await.unwrap(), Theme::Light);

        assert_eq!(svc.toggle_theme().await.unwrap(), Theme::Dark);
        assert_eq!(svc.theme().await.unwrap(), Theme::Dark);

        assert_eq!(svc.toggle_theme().await.unwrap(), Theme::Light);
    }
}
