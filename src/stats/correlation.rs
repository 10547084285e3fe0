use crate::stats::{compute_summary, StatsError};

/// Sample Pearson correlation of two index-aligned samples.
///
/// Both samples are standardized with the unbiased (n - 1) standard deviation
/// and the dot product of the z-scores is divided by n - 1 again. The raw value
/// is returned; rounding may push it marginally outside [-1, 1].
pub fn compute_correlation(a: &[f64], b: &[f64]) -> Result<f64, StatsError> {
    if a.len() != b.len() {
        return Err(StatsError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let n = a.len();
    if n < 2 {
        return Err(StatsError::InsufficientSamples(n));
    }

    let summary_a = compute_summary(a)?;
    let summary_b = compute_summary(b)?;

    // A constant series can still leave rounding noise in its deviations
    if summary_a.minimum == summary_a.maximum || summary_b.minimum == summary_b.maximum {
        return Err(StatsError::ZeroVariance);
    }

    let (mean_a, mean_b) = (summary_a.mean, summary_b.mean);
    let std_dev_a = sample_std_dev(a, mean_a);
    let std_dev_b = sample_std_dev(b, mean_b);
    if std_dev_a == 0.0 || std_dev_b == 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let z_a = standardize(a, mean_a, std_dev_a);
    let z_b = standardize(b, mean_b, std_dev_b);

    let dot_product = z_a
        .iter()
        .zip(z_b.iter())
        .fold(0.0, |acc, (x, y)| acc + x * y);

    Ok(dot_product / (n - 1) as f64)
}

// Caller guarantees len >= 2
fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    let squared_deviations = values
        .iter()
        .fold(0.0, |acc, &x| acc + (x - mean).powi(2));
    let variance = squared_deviations / (values.len() - 1) as f64;
    variance.sqrt()
}

fn standardize(values: &[f64], mean: f64, std_dev: f64) -> Vec<f64> {
    values.iter().map(|&x| (x - mean) / std_dev).collect()
}
