//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::DomainError;

/// Key-value store port. Local-storage analog: string keys, string values.
/// The pure domain never touches this; use cases read/write snapshots,
/// transcripts and preferences through it.
#[async_trait::async_trait]
pub trait StorePort: Send + Sync {
    /// Fetch a value. Returns None for a missing key.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Insert or replace a value.
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), DomainError>;
}

/// Clock port. Supplies "now" to the use cases; the domain calculators take
/// it as an explicit argument and never read ambient time.
pub trait ClockPort: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
