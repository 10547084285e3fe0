use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, info};
use crate::models::Country;
use crate::store::RecordStore;
use crate::Error;

/// In-process store, used for seeded runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    countries: RwLock<BTreeMap<String, Country>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let countries = countries
            .into_iter()
            .map(|country| (country.code.clone(), country))
            .collect();
        Self {
            countries: RwLock::new(countries),
        }
    }

    /// Loads a JSON array of countries.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(Error::from)
            .with_context(|| format!("Failed to read seed file {:?}", path))?;

        let countries: Vec<Country> = serde_json::from_str(&raw)
            .map_err(Error::from)
            .with_context(|| format!("Failed to parse seed file {:?}", path))?;

        info!("Loaded {} countries from {:?}", countries.len(), path);
        Ok(Self::with_countries(countries))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Country>> {
        Ok(self.countries.read().await.values().cloned().collect())
    }

    async fn get(&self, code: &str) -> Result<Option<Country>> {
        Ok(self.countries.read().await.get(code).cloned())
    }

    async fn insert(&self, country: &Country) -> Result<()> {
        let mut countries = self.countries.write().await;
        if countries.contains_key(&country.code) {
            return Err(Error::Validation(format!(
                "Country code {} already exists",
                country.code
            ))
            .into());
        }
        countries.insert(country.code.clone(), country.clone());
        debug!("Inserted country {}", country.code);
        Ok(())
    }

    async fn update(&self, code: &str, country: &Country) -> Result<()> {
        let mut countries = self.countries.write().await;
        if !countries.contains_key(code) {
            return Err(Error::NotFound(format!("Country code {}", code)).into());
        }
        if country.code != code && countries.contains_key(&country.code) {
            return Err(Error::Validation(format!(
                "Country code {} already exists",
                country.code
            ))
            .into());
        }
        countries.remove(code);
        countries.insert(country.code.clone(), country.clone());
        debug!("Updated country {} -> {}", code, country.code);
        Ok(())
    }

    async fn delete(&self, code: &str) -> Result<()> {
        match self.countries.write().await.remove(code) {
            Some(_) => {
                debug!("Deleted country {}", code);
                Ok(())
            }
            None => Err(Error::NotFound(format!("Country code {}", code)).into()),
        }
    }
}
