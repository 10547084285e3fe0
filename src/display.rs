use itertools::Itertools;
use crate::constants::{DISPLAY_DECIMALS, MISSING_VALUE, RULE_WIDTH};
use crate::models::Country;
use crate::stats::StatisticsReport;

// Every finite f64 has a terminating binary expansion within this many decimals
const EXACT_DECIMALS: usize = 1074;

/// HALF_UP on the exact binary value, not on `value * 100`.
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{:.*}", EXACT_DECIMALS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(DISPLAY_DECIMALS))
        .collect();

    let rounds_up = fraction
        .as_bytes()
        .get(DISPLAY_DECIMALS)
        .map_or(false, |&digit| digit >= b'5');
    if rounds_up {
        carry_one(&mut digits);
    }

    let split = digits.len() - DISPLAY_DECIMALS;
    let text = format!(
        "{}.{}",
        String::from_utf8_lossy(&digits[..split]),
        String::from_utf8_lossy(&digits[split..])
    );
    let rounded = text.parse::<f64>().unwrap_or(value.abs());

    // no "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded.copysign(value)
    }
}

fn carry_one(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.*}", DISPLAY_DECIMALS, round_half_up(v)),
        None => MISSING_VALUE.to_string(),
    }
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn render_table(countries: &[Country]) -> String {
    let header = format!(
        "{:<10}{:<45}{:>15}{:>10}",
        "Code", "Country", "Internet Users", "Literacy"
    );

    let rows = countries.iter().map(|country| {
        format!(
            "{:<10}{:<45}{:>15}{:>10}",
            country.code,
            country.name,
            format_value(country.internet_users),
            format_value(country.adult_literacy_rate)
        )
    });

    std::iter::once(header)
        .chain(std::iter::once(rule()))
        .chain(rows)
        .join("\n")
}

pub fn render_statistics(report: &StatisticsReport) -> String {
    let header = format!(
        "{:<20}{:>15}{:>15}{:>15}{:>15}",
        "Indicator", "Min", "Max", "Count", "Average"
    );

    let rows = report.indicators.iter().map(|stats| match &stats.summary {
        Ok(summary) => format!(
            "{:<20}{:>15}{:>15}{:>15}{:>15}",
            stats.indicator.to_string(),
            format_value(Some(summary.minimum)),
            format_value(Some(summary.maximum)),
            summary.count,
            format_value(Some(summary.mean))
        ),
        Err(_) => format!(
            "{:<20}{:>15}{:>15}{:>15}{:>15}",
            stats.indicator.to_string(),
            MISSING_VALUE,
            MISSING_VALUE,
            MISSING_VALUE,
            MISSING_VALUE
        ),
    });

    let correlation = format!(
        "\n* Correlation: {}",
        format_value(report.correlation.as_ref().ok().copied())
    );

    std::iter::once(header)
        .chain(std::iter::once(rule()))
        .chain(rows)
        .chain(std::iter::once(correlation))
        .join("\n")
}
