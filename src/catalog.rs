use anyhow::{Context, Result};
use tracing::info;
use crate::models::{
    validate_code, validate_country, validate_indicator, validate_name, Country, Indicator,
};
use crate::store::RecordStore;
use crate::Error;

/// Field edits for an existing country. `None` leaves a field untouched;
/// `Some(None)` clears an indicator.
#[derive(Debug, Clone, Default)]
pub struct CountryChanges {
    pub code: Option<String>,
    pub name: Option<String>,
    pub internet_users: Option<Option<f64>>,
    pub adult_literacy_rate: Option<Option<f64>>,
}

async fn existing_codes(store: &dyn RecordStore) -> Result<Vec<String>> {
    let codes = store
        .list_all()
        .await
        .context("Failed to list existing country codes")?
        .into_iter()
        .map(|country| country.code)
        .collect();
    Ok(codes)
}

pub async fn add_country(store: &dyn RecordStore, country: Country) -> Result<Country> {
    let codes = existing_codes(store).await?;
    validate_country(&country, codes.iter().map(String::as_str))?;

    store.insert(&country).await?;
    info!("Country {} added successfully", country.code);
    Ok(country)
}

pub async fn edit_country(
    store: &dyn RecordStore,
    code: &str,
    changes: CountryChanges,
) -> Result<Country> {
    let mut country = store
        .get(code)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Country code {} does not exist", code)))?;

    if let Some(new_code) = changes.code {
        if new_code != country.code {
            let codes = existing_codes(store).await?;
            validate_code(&new_code, codes.iter().map(String::as_str))?;
            country.code = new_code;
        }
    }

    if let Some(name) = changes.name {
        validate_name(&name)?;
        country.name = name;
    }

    if let Some(internet_users) = changes.internet_users {
        validate_indicator(Indicator::InternetUsers, internet_users)?;
        country.internet_users = internet_users;
    }

    if let Some(adult_literacy_rate) = changes.adult_literacy_rate {
        validate_indicator(Indicator::AdultLiteracyRate, adult_literacy_rate)?;
        country.adult_literacy_rate = adult_literacy_rate;
    }

    store.update(code, &country).await?;
    info!("Country {} updated successfully", country.code);
    Ok(country)
}

pub async fn delete_country(store: &dyn RecordStore, code: &str) -> Result<Country> {
    let country = store
        .get(code)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Country code {} does not exist", code)))?;

    store.delete(code).await?;
    info!("Country {} deleted successfully", code);
    Ok(country)
}
