//! Number formatting shared by every report section.
//!
//! Percentages are computed from the integer counts directly, so the two
//! decimal places shown are exact and every table rounds the same way.

use serde::{Deserialize, Serialize};

/// Tie-breaking rule for the second decimal place of a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Ties go up: 12.345 -> 12.35
    #[default]
    HalfUp,
    /// Ties go to the even digit: 12.345 -> 12.34, 12.355 -> 12.36
    HalfEven,
}

impl RoundingMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "half-up" | "half_up" => Some(Self::HalfUp),
            "half-even" | "half_even" | "bankers" => Some(Self::HalfEven),
            _ => None,
        }
    }

    /// `100 * numerator / denominator` rounded to two decimal places.
    ///
    /// Returns 0.0 for a zero denominator.
    pub fn percent(self, numerator: u64, denominator: u64) -> f64 {
        if denominator == 0 {
            return 0.0;
        }
        let scaled = u128::from(numerator) * 10_000;
        let denominator = u128::from(denominator);
        let quotient = scaled / denominator;
        let twice_remainder = (scaled % denominator) * 2;

        let hundredths = match twice_remainder.cmp(&denominator) {
            std::cmp::Ordering::Less => quotient,
            std::cmp::Ordering::Greater => quotient + 1,
            std::cmp::Ordering::Equal => match self {
                Self::HalfUp => quotient + 1,
                Self::HalfEven if quotient % 2 == 0 => quotient,
                Self::HalfEven => quotient + 1,
            },
        };
        hundredths as f64 / 100.0
    }
}

/// Dollar amount with thousands separators: `$26,000`, `-$1`.
pub fn format_amount(value: i64) -> String {
    let digits = group_thousands(value.unsigned_abs());
    if value < 0 {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

pub fn format_count(value: u64) -> String {
    group_thousands(value)
}

pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
