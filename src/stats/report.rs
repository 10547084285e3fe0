use anyhow::{Context, Result};
use tracing::{info, warn};
use crate::models::{paired_sample, sample, Country, Indicator};
use crate::stats::{compute_correlation, compute_summary, StatisticsSummary, StatsError};
use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorStatistics {
    pub indicator: Indicator,
    pub summary: Result<StatisticsSummary, StatsError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub indicators: Vec<IndicatorStatistics>,
    pub correlation: Result<f64, StatsError>,
}

impl StatisticsReport {
    pub fn from_countries(countries: &[Country]) -> Self {
        let indicators = Indicator::ALL
            .iter()
            .map(|&indicator| {
                let summary = compute_summary(&sample(countries, indicator));
                if let Err(e) = &summary {
                    warn!("No statistics for {}: {}", indicator, e);
                }
                IndicatorStatistics { indicator, summary }
            })
            .collect();

        let (internet_users, literacy_rates) = paired_sample(
            countries,
            Indicator::InternetUsers,
            Indicator::AdultLiteracyRate,
        );
        let correlation = compute_correlation(&internet_users, &literacy_rates);
        if let Err(e) = &correlation {
            warn!(
                "Correlation undefined over {} paired records: {}",
                internet_users.len(),
                e
            );
        }

        Self {
            indicators,
            correlation,
        }
    }

    pub async fn build(store: &dyn RecordStore) -> Result<Self> {
        let countries = store
            .list_all()
            .await
            .context("Failed to list countries for statistics")?;

        info!("Computing statistics over {} countries", countries.len());
        Ok(Self::from_countries(&countries))
    }

    pub fn summary_for(&self, indicator: Indicator) -> Option<&Result<StatisticsSummary, StatsError>> {
        self.indicators
            .iter()
            .find(|stats| stats.indicator == indicator)
            .map(|stats| &stats.summary)
    }
}
