use crate::anchors::AnchorPoints;
use crate::error::GeneratorError;
use chrono::{Days, NaiveDate};
use core_types::{PricePoint, PriceSeries};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Tuning values for the random walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkParams {
    /// Half-width of the uniform daily noise (0.02 is ±2%).
    pub noise: f64,
    /// Scale of the linear drift term `i / length`.
    pub drift_scale: f64,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            noise: 0.02,
            drift_scale: 0.00025,
        }
    }
}

/// A stateless generator for synthetic daily closes.
#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    params: WalkParams,
}

impl SeriesGenerator {
    /// Creates a new `SeriesGenerator`, validating the walk parameters.
    pub fn new(params: WalkParams) -> Result<Self, GeneratorError> {
        if !(0.0..1.0).contains(&params.noise) {
            return Err(GeneratorError::InvalidInput(format!(
                "noise must be within [0, 1), got {}",
                params.noise
            )));
        }
        if !params.drift_scale.is_finite() || params.drift_scale < 0.0 {
            return Err(GeneratorError::InvalidInput(format!(
                "drift_scale must be finite and non-negative, got {}",
                params.drift_scale
            )));
        }
        Ok(Self { params })
    }

    /// Generates `length` daily closes starting at `start_date` / `start_price`.
    ///
    /// Point 0 is the start price itself. Each later close is
    /// `round(prev * (1 + r + (i / length) * drift_scale))` with
    /// `r ~ U[-noise, noise]`, compounding on the rounded value.
    pub fn generate<R: Rng>(
        &self,
        start_date: NaiveDate,
        start_price: i64,
        length: usize,
        rng: &mut R,
    ) -> Result<PriceSeries, GeneratorError> {
        if length < 1 {
            return Err(GeneratorError::InvalidInput(
                "length must be at least 1".to_string(),
            ));
        }
        if start_price <= 0 {
            return Err(GeneratorError::InvalidInput(format!(
                "start_price must be positive, got {}",
                start_price
            )));
        }

        let mut points = Vec::with_capacity(length);
        let mut price = start_price;

        for i in 0..length {
            let date = start_date.checked_add_days(Days::new(i as u64)).ok_or_else(|| {
                GeneratorError::InvalidInput(format!(
                    "date overflow {} days after {}",
                    i, start_date
                ))
            })?;

            if i > 0 {
                price = self.step(price, i, length, rng)?;
            }
            points.push(PricePoint::new(i, date, price));
        }

        let series = PriceSeries::new(points)?;
        tracing::debug!(
            length,
            first = series.first().price,
            last = series.last().price,
            "Generated random walk"
        );
        Ok(series)
    }

    /// Like [`SeriesGenerator::generate`], using a `StdRng` seeded with `seed`.
    pub fn generate_seeded(
        &self,
        start_date: NaiveDate,
        start_price: i64,
        length: usize,
        seed: u64,
    ) -> Result<PriceSeries, GeneratorError> {
        tracing::debug!(seed, "Seeding random walk");
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(start_date, start_price, length, &mut rng)
    }

    /// Generates a walk and then overwrites its tail with `anchors`.
    pub fn generate_anchored<R: Rng>(
        &self,
        start_date: NaiveDate,
        start_price: i64,
        length: usize,
        anchors: &AnchorPoints,
        rng: &mut R,
    ) -> Result<PriceSeries, GeneratorError> {
        let series = self.generate(start_date, start_price, length, rng)?;
        anchors.apply(&series)
    }

    fn step<R: Rng>(
        &self,
        previous: i64,
        i: usize,
        length: usize,
        rng: &mut R,
    ) -> Result<i64, GeneratorError> {
        let noise = if self.params.noise > 0.0 {
            rng.random_range(-self.params.noise..=self.params.noise)
        } else {
            0.0
        };
        let drift = (i as f64 / length as f64) * self.params.drift_scale;
        let next = (previous as f64 * (1.0 + noise + drift)).round();

        if !next.is_finite() || next >= i64::MAX as f64 {
            return Err(GeneratorError::NumericDomain(format!(
                "price overflowed at step {}",
                i
            )));
        }
        if next < 1.0 {
            return Err(GeneratorError::NumericDomain(format!(
                "price fell to {} at step {}",
                next, i
            )));
        }
        Ok(next as i64)
    }
}
