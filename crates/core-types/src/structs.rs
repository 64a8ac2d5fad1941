use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily close in the base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Position of the point in its series, starting at 0.
    pub index: usize,
    pub date: NaiveDate,
    /// Closing price in whole currency units (KRW).
    pub price: i64,
}

impl PricePoint {
    pub fn new(index: usize, date: NaiveDate, price: i64) -> Self {
        Self { index, date, price }
    }
}

/// An ordered, validated sequence of daily closes.
///
/// A `PriceSeries` can only be built through [`PriceSeries::new`], which checks
/// that the series is non-empty, that indices count up from 0 one at a time,
/// that every date is exactly one calendar day after its predecessor and that
/// all prices are positive. Once built it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, CoreError> {
        if points.is_empty() {
            return Err(CoreError::InvalidInput(
                "price series".to_string(),
                "at least one point is required".to_string(),
            ));
        }

        for (i, point) in points.iter().enumerate() {
            if point.index != i {
                return Err(CoreError::InvalidInput(
                    "price series".to_string(),
                    format!("point {} carries index {}", i, point.index),
                ));
            }
            if point.price <= 0 {
                return Err(CoreError::InvalidInput(
                    "price series".to_string(),
                    format!("price at index {} must be positive, got {}", i, point.price),
                ));
            }
        }

        for pair in points.windows(2) {
            if pair[0].date.succ_opt() != Some(pair[1].date) {
                return Err(CoreError::InvalidInput(
                    "price series".to_string(),
                    format!(
                        "date {} does not follow {} by one day",
                        pair[1].date, pair[0].date
                    ),
                ));
            }
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a validated series; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    pub fn first(&self) -> &PricePoint {
        &self.points[0]
    }

    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    pub fn prices(&self) -> impl Iterator<Item = i64> + '_ {
        self.points.iter().map(|p| p.price)
    }

    /// Returns a new series with the same dates and the given prices.
    ///
    /// The replacement goes through the same validation as [`PriceSeries::new`].
    pub fn with_prices(&self, prices: &[i64]) -> Result<Self, CoreError> {
        if prices.len() != self.points.len() {
            return Err(CoreError::InvalidInput(
                "price series".to_string(),
                format!(
                    "expected {} prices, got {}",
                    self.points.len(),
                    prices.len()
                ),
            ));
        }
        let points = self
            .points
            .iter()
            .zip(prices)
            .map(|(p, &price)| PricePoint::new(p.index, p.date, price))
            .collect();
        Self::new(points)
    }
}

/// The log return between two consecutive closes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    /// Date of the later of the two closes.
    pub date: NaiveDate,
    pub previous_price: i64,
    pub current_price: i64,
    pub log_return: f64,
}

impl ReturnPoint {
    /// The log return expressed in percent.
    pub fn percentage(&self) -> f64 {
        self.log_return * 100.0
    }
}

/// An ordered sequence of log returns.
///
/// Dates must be strictly increasing and every log return finite. An empty
/// series is allowed; the statistics built on top of it reject it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReturnSeries {
    points: Vec<ReturnPoint>,
}

impl ReturnSeries {
    pub fn new(points: Vec<ReturnPoint>) -> Result<Self, CoreError> {
        if let Some(bad) = points.iter().find(|p| !p.log_return.is_finite()) {
            return Err(CoreError::NumericDomain(format!(
                "log return on {} is not finite",
                bad.date
            )));
        }
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(CoreError::InvalidInput(
                    "return series".to_string(),
                    format!("date {} is not after {}", pair[1].date, pair[0].date),
                ));
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[ReturnPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The raw log-return values in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.log_return).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 9, 13)
            .unwrap()
            .checked_add_days(chrono::Days::new(offset))
            .unwrap()
    }

    #[test]
    fn accepts_consecutive_days() {
        let series = PriceSeries::new(vec![
            PricePoint::new(0, day(0), 100),
            PricePoint::new(1, day(1), 101),
            PricePoint::new(2, day(2), 99),
        ])
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.first().price, 100);
        assert_eq!(series.last().price, 99);
        assert_eq!(series.prices().collect::<Vec<_>>(), vec![100, 101, 99]);
    }

    #[test]
    fn rejects_empty_series() {
        assert!(matches!(
            PriceSeries::new(vec![]),
            Err(CoreError::InvalidInput(_, _))
        ));
    }

    #[test]
    fn rejects_non_positive_price() {
        let result = PriceSeries::new(vec![
            PricePoint::new(0, day(0), 100),
            PricePoint::new(1, day(1), 0),
        ]);
        assert!(matches!(result, Err(CoreError::InvalidInput(_, _))));
    }

    #[test]
    fn rejects_date_gap() {
        let result = PriceSeries::new(vec![
            PricePoint::new(0, day(0), 100),
            PricePoint::new(1, day(2), 100),
        ]);
        assert!(matches!(result, Err(CoreError::InvalidInput(_, _))));
    }

    #[test]
    fn rejects_out_of_order_index() {
        let result = PriceSeries::new(vec![
            PricePoint::new(0, day(0), 100),
            PricePoint::new(2, day(1), 100),
        ]);
        assert!(matches!(result, Err(CoreError::InvalidInput(_, _))));
    }

    #[test]
    fn with_prices_keeps_dates() {
        let series = PriceSeries::new(vec![
            PricePoint::new(0, day(0), 100),
            PricePoint::new(1, day(1), 101),
        ])
        .unwrap();

        let replaced = series.with_prices(&[7, 8]).unwrap();
        assert_eq!(replaced.get(1).unwrap().date, day(1));
        assert_eq!(replaced.prices().collect::<Vec<_>>(), vec![7, 8]);
        assert!(series.with_prices(&[1]).is_err());
    }

    #[test]
    fn return_series_rejects_nan() {
        let result = ReturnSeries::new(vec![ReturnPoint {
            date: day(1),
            previous_price: 1,
            current_price: 1,
            log_return: f64::NAN,
        }]);
        assert!(matches!(result, Err(CoreError::NumericDomain(_))));
    }
}
