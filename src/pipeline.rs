use analytics::{
    BoxPlotStats, MovingAveragePoint, PriceSummary, StatsEngine, SummaryStats,
    VolatilityThresholds,
};
use configuration::{AnalysisSettings, Config};
use core_types::{PriceSeries, ReturnPoint, ReturnSeries, Trend, VolatilityLevel};
use generator::{AnchorPoints, GeneratorError, SeriesGenerator, WalkParams};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// Everything the report shows, derived once from a single price series.
///
/// Sections that could not be computed are `None` (or empty) and render as
/// `n/a`; the failure is logged, not propagated.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub series: PriceSeries,
    pub returns: Option<ReturnSeries>,
    pub summary: Option<SummaryStats>,
    pub box_plot: Option<BoxPlotStats>,
    pub price_summary: Option<PriceSummary>,
    pub trend: Trend,
    pub volatility: Option<VolatilityLevel>,
    pub moving_averages: Vec<MovingAverage>,
    pub extreme_returns: Vec<ReturnPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovingAverage {
    pub window: usize,
    pub points: Vec<MovingAveragePoint>,
}

/// Generates the anchored series described by `config`.
///
/// `seed` overrides `series.seed`; with neither, the RNG is seeded from OS entropy.
pub fn generate_series(config: &Config, seed: Option<u64>) -> Result<PriceSeries, GeneratorError> {
    let generator = SeriesGenerator::new(WalkParams {
        noise: config.walk.noise,
        drift_scale: config.walk.drift_scale,
    })?;
    let anchors = AnchorPoints::new(config.series.anchors.clone())?;

    let mut rng = match seed.or(config.series.seed) {
        Some(seed) => {
            tracing::info!(seed, "Using seeded RNG");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    generator.generate_anchored(
        config.series.start_date,
        config.series.start_price,
        config.series.length,
        &anchors,
        &mut rng,
    )
}

/// Runs returns, statistics and insights over `series`.
pub fn analyze(series: PriceSeries, settings: &AnalysisSettings) -> Analysis {
    let engine = StatsEngine::new();

    let returns = analytics::compute_log_returns(&series)
        .inspect_err(|e| tracing::warn!(error = %e, "Log returns unavailable"))
        .ok();

    let summary = returns.as_ref().and_then(|r| {
        engine
            .summarize(r)
            .inspect_err(|e| tracing::warn!(error = %e, "Summary statistics unavailable"))
            .ok()
    });

    let box_plot = returns.as_ref().and_then(|r| {
        engine
            .box_plot(r)
            .inspect_err(|e| tracing::warn!(error = %e, "Box plot unavailable"))
            .ok()
    });

    let price_summary = analytics::price_summary(&series)
        .inspect_err(|e| tracing::warn!(error = %e, "Price summary unavailable"))
        .ok();

    let thresholds = VolatilityThresholds {
        high: settings.volatility_high,
        medium: settings.volatility_medium,
    };
    let volatility = summary.map(|s| thresholds.classify(s.std_dev));

    let moving_averages = settings
        .moving_average_windows
        .iter()
        .filter_map(|&window| {
            analytics::moving_average(&series, window)
                .inspect_err(|e| tracing::warn!(window, error = %e, "Moving average unavailable"))
                .ok()
                .map(|points| MovingAverage { window, points })
        })
        .collect();

    let extreme_returns = match (&returns, &summary) {
        (Some(returns), Some(summary)) => {
            analytics::extreme_returns(returns, summary, settings.extreme_sigmas)
        }
        _ => Vec::new(),
    };

    let trend = analytics::trend(&series);
    tracing::info!(
        points = series.len(),
        %trend,
        extremes = extreme_returns.len(),
        "Analysis complete"
    );

    Analysis {
        series,
        returns,
        summary,
        box_plot,
        price_summary,
        trend,
        volatility,
        moving_averages,
        extreme_returns,
    }
}
