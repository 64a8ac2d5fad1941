use crate::error::GeneratorError;
use core_types::PriceSeries;
use serde::{Deserialize, Serialize};

/// Known closing prices pinned onto the end of a generated series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorPoints {
    closes: Vec<i64>,
}

impl AnchorPoints {
    pub fn new(closes: Vec<i64>) -> Result<Self, GeneratorError> {
        if let Some(bad) = closes.iter().find(|&&c| c <= 0) {
            return Err(GeneratorError::InvalidInput(format!(
                "anchor prices must be positive, got {}",
                bad
            )));
        }
        Ok(Self { closes })
    }

    /// No anchors: `apply` returns the series unchanged.
    pub fn none() -> Self {
        Self { closes: Vec::new() }
    }

    /// The five most recent 005930.KS closes the reference dashboard ends on.
    pub fn reference_closes() -> Self {
        Self {
            closes: vec![70100, 69500, 70100, 71500, 72600],
        }
    }

    /// Returns a copy of `series` whose last closes are replaced by the anchors.
    ///
    /// When the series is shorter than the anchor list, the trailing anchors are
    /// aligned to the end of the series and the leading ones are dropped.
    pub fn apply(&self, series: &PriceSeries) -> Result<PriceSeries, GeneratorError> {
        if self.closes.is_empty() {
            return Ok(series.clone());
        }

        let mut prices: Vec<i64> = series.prices().collect();
        let overlap = self.closes.len().min(prices.len());
        let tail_start = prices.len() - overlap;
        let anchor_start = self.closes.len() - overlap;
        prices[tail_start..].copy_from_slice(&self.closes[anchor_start..]);

        tracing::debug!(anchored = overlap, "Applied anchor points");
        Ok(series.with_prices(&prices)?)
    }
}

impl Default for AnchorPoints {
    fn default() -> Self {
        Self::reference_closes()
    }
}
