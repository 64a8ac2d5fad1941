use crate::error::AnalyticsError;
use core_types::{PriceSeries, ReturnPoint, ReturnSeries};

/// Computes `ln(p[i] / p[i-1])` for every consecutive pair of closes.
///
/// The result has exactly `series.len() - 1` points, dated on the later close.
/// Fewer than two closes is an `InvalidInput`; a non-positive close or a
/// non-finite ratio is a `NumericDomain` error.
pub fn compute_log_returns(series: &PriceSeries) -> Result<ReturnSeries, AnalyticsError> {
    if series.len() < 2 {
        return Err(AnalyticsError::InvalidInput(format!(
            "log returns need at least 2 prices, got {}",
            series.len()
        )));
    }

    let points = series
        .points()
        .windows(2)
        .map(|pair| {
            let (previous, current) = (pair[0], pair[1]);
            if previous.price <= 0 || current.price <= 0 {
                return Err(AnalyticsError::NumericDomain(format!(
                    "non-positive price between {} and {}",
                    previous.date, current.date
                )));
            }

            let log_return = (current.price as f64 / previous.price as f64).ln();
            if !log_return.is_finite() {
                return Err(AnalyticsError::NumericDomain(format!(
                    "log return on {} is not finite",
                    current.date
                )));
            }

            Ok(ReturnPoint {
                date: current.date,
                previous_price: previous.price,
                current_price: current.price,
                log_return,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = points.len(), "Computed log returns");
    Ok(ReturnSeries::new(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::PricePoint;

    fn series(prices: &[i64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2022, 9, 13).unwrap();
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                PricePoint::new(i, start + chrono::Days::new(i as u64), p)
            })
            .collect();
        PriceSeries::new(points).unwrap()
    }

    #[test]
    fn returns_are_dated_on_the_later_close() {
        let returns = compute_log_returns(&series(&[100, 110, 99])).unwrap();

        assert_eq!(returns.len(), 2);
        let first = returns.points()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2022, 9, 14).unwrap());
        assert_eq!(first.previous_price, 100);
        assert_eq!(first.current_price, 110);
        assert!((first.log_return - (1.1f64).ln()).abs() < 1e-15);
        assert!(returns.points()[1].log_return < 0.0);
    }

    #[test]
    fn flat_prices_give_zero_returns() {
        let returns = compute_log_returns(&series(&[500, 500, 500])).unwrap();
        assert!(returns.values().iter().all(|&r| r == 0.0));
    }

    #[test]
    fn single_price_is_invalid() {
        assert!(matches!(
            compute_log_returns(&series(&[100])),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }
}
