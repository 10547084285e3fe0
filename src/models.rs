use serde::{Deserialize, Serialize};
use std::fmt;
use crate::constants::{CODE_LENGTH, MAX_DECIMAL_DIGITS, MAX_INTEGER_DIGITS, MAX_NAME_LENGTH};
use crate::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub internet_users: Option<f64>,
    #[serde(default)]
    pub adult_literacy_rate: Option<f64>,
}

impl Country {
    pub fn builder(code: impl Into<String>, name: impl Into<String>) -> CountryBuilder {
        CountryBuilder::new(code, name)
    }
}

#[derive(Debug, Clone)]
pub struct CountryBuilder {
    code: String,
    name: String,
    internet_users: Option<f64>,
    adult_literacy_rate: Option<f64>,
}

impl CountryBuilder {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            internet_users: None,
            adult_literacy_rate: None,
        }
    }

    pub fn with_internet_users(mut self, internet_users: Option<f64>) -> Self {
        self.internet_users = internet_users;
        self
    }

    pub fn with_adult_literacy_rate(mut self, adult_literacy_rate: Option<f64>) -> Self {
        self.adult_literacy_rate = adult_literacy_rate;
        self
    }

    pub fn build(self) -> Country {
        Country {
            code: self.code,
            name: self.name,
            internet_users: self.internet_users,
            adult_literacy_rate: self.adult_literacy_rate,
        }
    }
}

/// The two tracked per-country metrics.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Indicator {
    InternetUsers,
    AdultLiteracyRate,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::InternetUsers => write!(f, "Internet Users"),
            Indicator::AdultLiteracyRate => write!(f, "Adult Literacy Rate"),
        }
    }
}

impl Indicator {
    pub const ALL: [Indicator; 2] = [Indicator::InternetUsers, Indicator::AdultLiteracyRate];

    pub fn value_of(&self, country: &Country) -> Option<f64> {
        match self {
            Indicator::InternetUsers => country.internet_users,
            Indicator::AdultLiteracyRate => country.adult_literacy_rate,
        }
    }
}

/// Present readings of one indicator, in record order.
pub fn sample(countries: &[Country], indicator: Indicator) -> Vec<f64> {
    countries
        .iter()
        .filter_map(|country| indicator.value_of(country))
        .collect()
}

/// Readings of two indicators restricted to records where both are present.
/// Index `i` of each vector refers to the same record.
pub fn paired_sample(countries: &[Country], a: Indicator, b: Indicator) -> (Vec<f64>, Vec<f64>) {
    countries
        .iter()
        .filter_map(|country| match (a.value_of(country), b.value_of(country)) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .unzip()
}

pub fn validate_code<'a, I>(code: &str, existing: I) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let is_taken = existing.into_iter().any(|other| other == code);
    if code.chars().count() != CODE_LENGTH || is_taken {
        return Err(Error::Validation(format!(
            "Country code must be a new, unique, {}-character string",
            CODE_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), Error> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(Error::Validation(format!(
            "Country name can have a maximum of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Checks the shortest decimal rendering of `value` against the column precision.
pub fn validate_indicator(indicator: Indicator, value: Option<f64>) -> Result<(), Error> {
    let Some(value) = value else {
        return Ok(());
    };

    let label = indicator.to_string().to_lowercase();
    if !value.is_finite() {
        return Err(Error::Validation(format!(
            "Country {} must be a finite number",
            label
        )));
    }

    let text = value.abs().to_string();
    let (integer, decimals) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if integer.len() > MAX_INTEGER_DIGITS || decimals.len() > MAX_DECIMAL_DIGITS {
        return Err(Error::Validation(format!(
            "Country {} can have a maximum of {} digits and {} decimals",
            label, MAX_INTEGER_DIGITS, MAX_DECIMAL_DIGITS
        )));
    }
    Ok(())
}

pub fn validate_country<'a, I>(country: &Country, existing_codes: I) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a str>,
{
    validate_code(&country.code, existing_codes)?;
    validate_name(&country.name)?;
    for indicator in Indicator::ALL {
        validate_indicator(indicator, indicator.value_of(country))?;
    }
    Ok(())
}
