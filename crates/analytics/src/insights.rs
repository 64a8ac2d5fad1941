//! Secondary figures a report shows alongside the core statistics.

use crate::error::AnalyticsError;
use crate::report::{MovingAveragePoint, PriceComparison, PriceSummary, SummaryStats};
use core_types::{PriceSeries, ReturnPoint, ReturnSeries, Trend, VolatilityLevel};
use serde::{Deserialize, Serialize};

const DAYS_PER_YEAR: f64 = 365.0;

/// Compares the closes at two positions of a series.
pub fn compare_prices(
    series: &PriceSeries,
    from_index: usize,
    to_index: usize,
) -> Result<PriceComparison, AnalyticsError> {
    let lookup = |index: usize| {
        series.get(index).copied().ok_or_else(|| {
            AnalyticsError::InvalidInput(format!(
                "index {} is outside 0..{}",
                index,
                series.len()
            ))
        })
    };
    let from = lookup(from_index)?;
    let to = lookup(to_index)?;

    if from.price <= 0 {
        return Err(AnalyticsError::NumericDomain(format!(
            "cannot compare against non-positive price on {}",
            from.date
        )));
    }

    let difference = to.price - from.price;
    let percentage_change = difference as f64 / from.price as f64 * 100.0;
    let days_between = from_index.abs_diff(to_index);
    let annualized_pct = (days_between > 0)
        .then(|| percentage_change * (DAYS_PER_YEAR / days_between as f64));

    Ok(PriceComparison {
        from,
        to,
        difference,
        percentage_change,
        days_between,
        annualized_pct,
    })
}

/// Bullish when the last close is strictly above the first.
pub fn trend(series: &PriceSeries) -> Trend {
    if series.last().price > series.first().price {
        Trend::Bullish
    } else {
        Trend::Bearish
    }
}

/// Standard-deviation cut-offs for [`VolatilityLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for VolatilityThresholds {
    fn default() -> Self {
        Self {
            high: 0.02,
            medium: 0.01,
        }
    }
}

impl VolatilityThresholds {
    pub fn classify(&self, std_dev: f64) -> VolatilityLevel {
        if std_dev > self.high {
            VolatilityLevel::High
        } else if std_dev > self.medium {
            VolatilityLevel::Medium
        } else {
            VolatilityLevel::Low
        }
    }
}

/// Trailing simple moving average of the closes.
///
/// The first point is dated on the `window`-th close; a series shorter than
/// the window yields no points.
pub fn moving_average(
    series: &PriceSeries,
    window: usize,
) -> Result<Vec<MovingAveragePoint>, AnalyticsError> {
    if window == 0 {
        return Err(AnalyticsError::InvalidInput(
            "moving average window must be at least 1".to_string(),
        ));
    }

    let points = series.points();
    if points.len() < window {
        return Ok(Vec::new());
    }

    let mut sum: i64 = points[..window].iter().map(|p| p.price).sum();
    let mut averages = Vec::with_capacity(points.len() - window + 1);
    averages.push(MovingAveragePoint {
        date: points[window - 1].date,
        value: sum as f64 / window as f64,
    });

    for i in window..points.len() {
        sum += points[i].price - points[i - window].price;
        averages.push(MovingAveragePoint {
            date: points[i].date,
            value: sum as f64 / window as f64,
        });
    }

    Ok(averages)
}

/// Returns further than `sigmas` standard deviations from the mean.
pub fn extreme_returns(
    returns: &ReturnSeries,
    stats: &SummaryStats,
    sigmas: f64,
) -> Vec<ReturnPoint> {
    let band = sigmas * stats.std_dev;
    returns
        .points()
        .iter()
        .filter(|p| (p.log_return - stats.mean).abs() > band)
        .copied()
        .collect()
}

/// Count, extrema, mean and sample standard deviation of the closes.
pub fn price_summary(series: &PriceSeries) -> Result<PriceSummary, AnalyticsError> {
    let count = series.len();
    if count < 2 {
        return Err(AnalyticsError::InvalidInput(format!(
            "price summary needs at least 2 prices, got {}",
            count
        )));
    }

    let n = count as f64;
    let mean = series.prices().map(|p| p as f64).sum::<f64>() / n;
    let squared: f64 = series
        .prices()
        .map(|p| (p as f64 - mean) * (p as f64 - mean))
        .sum();
    let std_dev = (squared / (n - 1.0)).sqrt();

    // Non-empty, so both extrema exist.
    let min = series.prices().min().unwrap_or_default();
    let max = series.prices().max().unwrap_or_default();

    Ok(PriceSummary {
        count,
        min,
        max,
        mean,
        std_dev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_strict_thresholds() {
        let thresholds = VolatilityThresholds::default();
        assert_eq!(thresholds.classify(0.03), VolatilityLevel::High);
        assert_eq!(thresholds.classify(0.02), VolatilityLevel::Medium);
        assert_eq!(thresholds.classify(0.015), VolatilityLevel::Medium);
        assert_eq!(thresholds.classify(0.01), VolatilityLevel::Low);
        assert_eq!(thresholds.classify(0.0), VolatilityLevel::Low);
    }
}
