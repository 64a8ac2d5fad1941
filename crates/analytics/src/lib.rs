//! # Quotescope Analytics Engine
//!
//! This crate turns a daily price series into the numbers the report shows.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O and no knowledge of configuration sources. It
//!   depends only on `core-types`.
//! - **Stateless calculation:** every function takes an immutable series and
//!   returns a new value. Calling it twice on the same input gives bit-identical
//!   results.
//! - **No silent NaN:** non-finite intermediate values surface as
//!   `AnalyticsError::NumericDomain` instead of leaking into a report.
//!
//! ## Public API
//!
//! - `compute_log_returns`: price series to log-return series.
//! - `StatsEngine`: summary statistics and box-plot statistics.
//! - `insights`: price comparison, trend, volatility bucket, moving averages,
//!   extreme returns and price summary.
//! - `AnalyticsError`: the errors this crate can return.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod insights;
pub mod report;
pub mod returns;

// Re-export the key components to create a clean, public-facing API.
pub use engine::StatsEngine;
pub use error::AnalyticsError;
pub use insights::{
    VolatilityThresholds, compare_prices, extreme_returns, moving_average, price_summary, trend,
};
pub use report::{BoxPlotStats, MovingAveragePoint, PriceComparison, PriceSummary, SummaryStats};
pub use returns::compute_log_returns;
