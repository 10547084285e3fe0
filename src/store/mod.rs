pub mod memory;
pub mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

use async_trait::async_trait;
use anyhow::Result;
use crate::models::Country;
use std::future::Future;
use tracing::warn;

/// Backing store for country records, keyed by country code.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, ordered by code.
    async fn list_all(&self) -> Result<Vec<Country>>;
    async fn get(&self, code: &str) -> Result<Option<Country>>;
    async fn insert(&self, country: &Country) -> Result<()>;
    /// Replaces the record stored under `code`; `country.code` may differ.
    async fn update(&self, code: &str, country: &Country) -> Result<()>;
    async fn delete(&self, code: &str) -> Result<()>;
}

#[async_trait]
pub trait DatabaseConnection: Send + Sync {
    async fn connect(&self) -> Result<()>;
    async fn disconnect(&self) -> Result<()>;
}

/// Connects, awaits `task`, then disconnects whether or not either step failed.
/// The first error takes precedence over a disconnect error.
pub async fn run_connected<C, F, T>(connection: &C, task: F) -> Result<T>
where
    C: DatabaseConnection + ?Sized,
    F: Future<Output = Result<T>>,
{
    let result = match connection.connect().await {
        Ok(()) => task.await,
        Err(e) => Err(e),
    };

    match connection.disconnect().await {
        Ok(()) => result,
        Err(e) if result.is_ok() => Err(e),
        Err(e) => {
            warn!("Failed to disconnect after earlier error: {:#}", e);
            result
        }
    }
}
