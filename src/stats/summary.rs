use serde::{Deserialize, Serialize};
use crate::stats::StatsError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub minimum: f64,
    pub maximum: f64,
    pub count: usize,
    pub mean: f64,
}

/// Min, max, count and arithmetic mean of a sample.
///
/// Values are reduced left to right so repeated calls on the same input are
/// bit-identical. An empty sample has no defined summary.
pub fn compute_summary(sample: &[f64]) -> Result<StatisticsSummary, StatsError> {
    let (&first, rest) = sample.split_first().ok_or(StatsError::EmptySample)?;

    let mut minimum = first;
    let mut maximum = first;
    let mut sum = first;
    for &value in rest {
        minimum = minimum.min(value);
        maximum = maximum.max(value);
        sum += value;
    }

    let count = sample.len();
    Ok(StatisticsSummary {
        minimum,
        maximum,
        count,
        mean: sum / count as f64,
    })
}
