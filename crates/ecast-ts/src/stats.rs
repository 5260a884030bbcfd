//! Regression and growth primitives shared by the field strategies.
//!
//! Both primitives are total: degenerate inputs map to documented fallback
//! values instead of `NaN`.

use ecast_core::{EnergyRecord, Field};

/// Number of trailing records used for average growth.
pub const DEFAULT_GROWTH_WINDOW: usize = 5;

/// Ordinary least squares fit of a field against record position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    /// Fitted value at position `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `value = slope * index + intercept` with `index = 0..n`.
///
/// A series with fewer than two points has slope 0 and intercept equal to the
/// mean (the single value, or 0 for an empty slice).
pub fn linear_regression(records: &[EnergyRecord], field: Field) -> Regression {
    let n = records.len() as f64;
    if records.is_empty() {
        return Regression::default();
    }

    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (i, record) in records.iter().enumerate() {
        let x = i as f64;
        let y = record.get(field);
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    let slope = if denominator == 0.0 {
        0.0
    } else {
        (n * sum_xy - sum_x * sum_y) / denominator
    };
    let intercept = (sum_y - slope * sum_x) / n;

    Regression { slope, intercept }
}

/// Mean year-over-year relative change over the last `window` records.
///
/// Transitions from a zero value are skipped. With no usable transition the
/// growth rate is 0.
pub fn growth_rate(records: &[EnergyRecord], field: Field, window: usize) -> f64 {
    let recent = &records[records.len().saturating_sub(window)..];

    let (sum, count) = recent
        .windows(2)
        .filter_map(|pair| {
            let prev = pair[0].get(field);
            let curr = pair[1].get(field);
            (prev != 0.0).then(|| (curr - prev) / prev)
        })
        .fold((0.0, 0usize), |(sum, count), rate| (sum + rate, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
