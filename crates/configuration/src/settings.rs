use crate::error::ConfigError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section falls back to its `Default`, so an empty or missing
/// `config.toml` yields the reference run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub series: SeriesSettings,
    pub walk: WalkSettings,
    pub analysis: AnalysisSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

/// Where the simulated series starts and how it ends.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeriesSettings {
    /// Date of the first close.
    pub start_date: NaiveDate,
    /// First close, in whole KRW.
    pub start_price: i64,
    /// Number of daily closes to generate.
    pub length: usize,
    /// Closes written over the tail of the series. Empty disables the override.
    pub anchors: Vec<i64>,
    /// Fixed RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

/// Tuning values for the random walk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkSettings {
    /// Half-width of the uniform daily noise (0.02 is ±2%).
    pub noise: f64,
    pub drift_scale: f64,
}

/// Parameters for the secondary figures of the report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub moving_average_windows: Vec<usize>,
    /// Returns further than this many standard deviations from the mean are flagged.
    pub extreme_sigmas: f64,
    pub volatility_high: f64,
    pub volatility_medium: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// MXN per KRW, applied to every displayed price.
    pub krw_to_mxn: Decimal,
    /// Show the MXN equivalent next to every KRW price.
    pub show_mxn: bool,
    /// Rows shown at each end of the price and return previews.
    pub preview_rows: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Directory for a daily-rolling log file. `None` logs to stderr only.
    pub directory: Option<String>,
}

// --- Default Implementations ---
// These reproduce the reference run: 734 days of 005930.KS from 2022-09-13.

impl Default for SeriesSettings {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2022, 9, 13).unwrap_or(NaiveDate::MIN),
            start_price: 58100,
            length: 734,
            anchors: vec![70100, 69500, 70100, 71500, 72600],
            seed: None,
        }
    }
}

impl Default for WalkSettings {
    fn default() -> Self {
        Self {
            noise: 0.02,
            drift_scale: 0.00025,
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            moving_average_windows: vec![30, 90],
            extreme_sigmas: 2.0,
            volatility_high: 0.02,
            volatility_medium: 0.01,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            krw_to_mxn: dec!(0.0135),
            show_mxn: true,
            preview_rows: 5,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Checks the cross-field and range constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::ValidationError(msg));

        if self.series.length == 0 {
            return invalid("series.length must be at least 1".to_string());
        }
        if self.series.start_price <= 0 {
            return invalid(format!(
                "series.start_price must be positive, got {}",
                self.series.start_price
            ));
        }
        if let Some(bad) = self.series.anchors.iter().find(|&&a| a <= 0) {
            return invalid(format!("series.anchors must be positive, got {}", bad));
        }
        if !(0.0..1.0).contains(&self.walk.noise) {
            return invalid(format!(
                "walk.noise must be within [0, 1), got {}",
                self.walk.noise
            ));
        }
        if !self.walk.drift_scale.is_finite() || self.walk.drift_scale < 0.0 {
            return invalid(format!(
                "walk.drift_scale must be finite and non-negative, got {}",
                self.walk.drift_scale
            ));
        }
        if self.analysis.moving_average_windows.contains(&0) {
            return invalid("analysis.moving_average_windows must not contain 0".to_string());
        }
        if !(self.analysis.extreme_sigmas > 0.0) {
            return invalid(format!(
                "analysis.extreme_sigmas must be positive, got {}",
                self.analysis.extreme_sigmas
            ));
        }
        if !(self.analysis.volatility_medium <= self.analysis.volatility_high) {
            return invalid(format!(
                "analysis.volatility_medium ({}) must not exceed volatility_high ({})",
                self.analysis.volatility_medium, self.analysis.volatility_high
            ));
        }
        if self.display.krw_to_mxn <= Decimal::ZERO {
            return invalid(format!(
                "display.krw_to_mxn must be positive, got {}",
                self.display.krw_to_mxn
            ));
        }
        Ok(())
    }
}
