use chrono::NaiveDate;
use core_types::PricePoint;
use serde::{Deserialize, Serialize};

/// Descriptive statistics of a set of log returns.
///
/// `variance` uses the population divisor (`count`), not `count - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

/// Quartiles, fences and outliers for a box-and-whisker display.
///
/// Quartiles use the nearest-rank convention `sorted[floor(n * p)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// Values beyond either fence, ascending.
    pub outliers: Vec<f64>,
}

/// Change in price between two points of the same series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceComparison {
    pub from: PricePoint,
    pub to: PricePoint,
    /// `to.price - from.price`
    pub difference: i64,
    pub percentage_change: f64,
    pub days_between: usize,
    /// `percentage_change * 365 / days_between`; `None` when both points coincide.
    pub annualized_pct: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Descriptive statistics of the closes themselves (sample standard deviation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    pub std_dev: f64,
}
