use crate::error::AnalyticsError;
use crate::report::{BoxPlotStats, SummaryStats};
use core_types::ReturnSeries;

/// Multiplier on the IQR that places the outlier fences.
const FENCE_MULTIPLIER: f64 = 1.5;

/// A stateless calculator for descriptive and box-plot statistics of log returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsEngine {}

impl StatsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarises a return series: count, extrema, mean, population variance
    /// and standard deviation.
    ///
    /// # Arguments
    ///
    /// * `returns` - A non-empty series of log returns.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `SummaryStats` or an `AnalyticsError` when the
    /// series is empty.
    pub fn summarize(&self, returns: &ReturnSeries) -> Result<SummaryStats, AnalyticsError> {
        self.summarize_values(&returns.values())
    }

    /// Computes nearest-rank quartiles, IQR fences, whiskers and outliers.
    pub fn box_plot(&self, returns: &ReturnSeries) -> Result<BoxPlotStats, AnalyticsError> {
        self.box_plot_values(&returns.values())
    }

    /// [`StatsEngine::summarize`] over raw values.
    pub fn summarize_values(&self, values: &[f64]) -> Result<SummaryStats, AnalyticsError> {
        check_values(values, "summary statistics")?;

        let count = values.len();
        let n = count as f64;

        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        check_results("summary statistics", &[("mean", mean), ("variance", variance)])?;
        let std_dev = variance.sqrt();

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            });

        let stats = SummaryStats {
            count,
            min,
            max,
            mean,
            variance,
            std_dev,
        };
        tracing::debug!(?stats, "Summarised returns");
        Ok(stats)
    }

    /// [`StatsEngine::box_plot`] over raw values.
    pub fn box_plot_values(&self, values: &[f64]) -> Result<BoxPlotStats, AnalyticsError> {
        check_values(values, "box plot")?;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();

        // Nearest rank: floor(n * p) is always < n for p < 1.
        let q1 = sorted[n / 4];
        let median = sorted[n / 2];
        let q3 = sorted[(n * 3) / 4];
        let iqr = q3 - q1;

        let lower_fence = q1 - FENCE_MULTIPLIER * iqr;
        let upper_fence = q3 + FENCE_MULTIPLIER * iqr;
        check_results(
            "box plot",
            &[("iqr", iqr), ("lower fence", lower_fence), ("upper fence", upper_fence)],
        )?;

        let lower_whisker = sorted[0].max(lower_fence);
        let upper_whisker = sorted[n - 1].min(upper_fence);

        let outliers: Vec<f64> = sorted
            .iter()
            .copied()
            .filter(|&v| v < lower_fence || v > upper_fence)
            .collect();

        tracing::debug!(q1, median, q3, outliers = outliers.len(), "Computed box plot");
        Ok(BoxPlotStats {
            q1,
            median,
            q3,
            iqr,
            lower_fence,
            upper_fence,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

fn check_values(values: &[f64], metric: &str) -> Result<(), AnalyticsError> {
    if values.is_empty() {
        return Err(AnalyticsError::InvalidInput(format!(
            "{} need at least 1 value",
            metric
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(AnalyticsError::NumericDomain(format!(
            "{} received a non-finite value",
            metric
        )));
    }
    Ok(())
}

/// Finite inputs can still overflow to infinity in sums and differences.
fn check_results(metric: &str, results: &[(&str, f64)]) -> Result<(), AnalyticsError> {
    match results.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, value)) => Err(AnalyticsError::NumericDomain(format!(
            "{} overflowed: {} is {}",
            metric, name, value
        ))),
        None => Ok(()),
    }
}
