use crate::currency::{format_amount, format_price};
use crate::pipeline::Analysis;
use analytics::{BoxPlotStats, PriceComparison, PriceSummary, SummaryStats};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use core_types::{PricePoint, ReturnPoint, ReturnSeries, VolatilityLevel};
use rust_decimal::Decimal;

const NOT_AVAILABLE: &str = "n/a";

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// First and last `rows` elements of `items`, without duplicates when they overlap.
fn head_and_tail<T>(items: &[T], rows: usize) -> Vec<&T> {
    if items.len() <= rows.saturating_mul(2) {
        return items.iter().collect();
    }
    items[..rows].iter().chain(&items[items.len() - rows..]).collect()
}

fn fmt_return(value: f64) -> String {
    format!("{:.6} ({:.2}%)", value, value * 100.0)
}

pub fn price_table(points: &[PricePoint], rows: usize, rate: Option<Decimal>) -> Table {
    let mut table = new_table(vec!["#", "Date", "Close"]);
    for point in head_and_tail(points, rows) {
        table.add_row(vec![
            Cell::new(point.index),
            Cell::new(point.date),
            Cell::new(format_price(point.price, rate)),
        ]);
    }
    table
}

fn return_row(point: &ReturnPoint) -> Vec<Cell> {
    vec![
        Cell::new(point.date),
        Cell::new(point.previous_price),
        Cell::new(point.current_price),
        Cell::new(format!("{:.6}", point.log_return)),
        Cell::new(format!("{:.4}%", point.percentage())),
        Cell::new(format!(
            "ln({}) - ln({}) = {:.6}",
            point.current_price, point.previous_price, point.log_return
        )),
    ]
}

const RETURN_HEADER: [&str; 6] = ["Date", "Previous", "Current", "Log return", "%", "Calculation"];

/// Head and tail of the return series; every return when `rows` is `None`.
pub fn return_table(returns: Option<&ReturnSeries>, rows: Option<usize>) -> Table {
    let mut table = new_table(RETURN_HEADER.to_vec());
    match returns {
        Some(returns) => {
            let points: Vec<&ReturnPoint> = match rows {
                Some(rows) => head_and_tail(returns.points(), rows),
                None => returns.points().iter().collect(),
            };
            for point in points {
                table.add_row(return_row(point));
            }
        }
        None => {
            table.add_row(vec![NOT_AVAILABLE; RETURN_HEADER.len()]);
        }
    }
    table
}

pub fn summary_table(summary: Option<&SummaryStats>, volatility: Option<VolatilityLevel>) -> Table {
    let mut table = new_table(vec!["Return statistic", "Value"]);
    let rows: Vec<(&str, String)> = match summary {
        Some(s) => vec![
            ("Count", s.count.to_string()),
            ("Minimum", fmt_return(s.min)),
            ("Maximum", fmt_return(s.max)),
            ("Mean", fmt_return(s.mean)),
            ("Variance", format!("{:.8}", s.variance)),
            ("Standard deviation", fmt_return(s.std_dev)),
        ],
        None => ["Count", "Minimum", "Maximum", "Mean", "Variance", "Standard deviation"]
            .into_iter()
            .map(|label| (label, NOT_AVAILABLE.to_string()))
            .collect(),
    };
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value]);
    }
    table.add_row(vec![
        "Volatility".to_string(),
        volatility.map_or(NOT_AVAILABLE.to_string(), |v| v.to_string()),
    ]);
    table
}

pub fn box_plot_table(stats: Option<&BoxPlotStats>) -> Table {
    let mut table = new_table(vec!["Box plot", "Value"]);
    let Some(s) = stats else {
        table.add_row(vec!["Quartiles", NOT_AVAILABLE]);
        return table;
    };

    for (label, value) in [
        ("Lower whisker", s.lower_whisker),
        ("Q1", s.q1),
        ("Median", s.median),
        ("Q3", s.q3),
        ("Upper whisker", s.upper_whisker),
        ("IQR", s.iqr),
        ("Lower fence", s.lower_fence),
        ("Upper fence", s.upper_fence),
    ] {
        table.add_row(vec![label.to_string(), fmt_return(value)]);
    }
    table.add_row(vec!["Outliers".to_string(), s.outliers.len().to_string()]);
    table
}

pub fn price_summary_table(summary: Option<&PriceSummary>, rate: Option<Decimal>) -> Table {
    let mut table = new_table(vec!["Price statistic", "Value"]);
    match summary {
        Some(s) => {
            table.add_row(vec!["Count".to_string(), s.count.to_string()]);
            table.add_row(vec!["Minimum".to_string(), format_price(s.min, rate)]);
            table.add_row(vec!["Maximum".to_string(), format_price(s.max, rate)]);
            table.add_row(vec!["Sample mean".to_string(), format_amount(s.mean, rate)]);
            table.add_row(vec![
                "Sample std deviation".to_string(),
                format_amount(s.std_dev, rate),
            ]);
        }
        None => {
            table.add_row(vec!["Prices", NOT_AVAILABLE]);
        }
    }
    table
}

pub fn insight_table(analysis: &Analysis, rate: Option<Decimal>) -> Table {
    let mut table = new_table(vec!["Insight", "Value"]);
    let first = analysis.series.first();
    let last = analysis.series.last();

    table.add_row(vec!["Period".to_string(), format!("{} to {}", first.date, last.date)]);
    table.add_row(vec!["Trading days".to_string(), analysis.series.len().to_string()]);
    table.add_row(vec!["First close".to_string(), format_price(first.price, rate)]);
    table.add_row(vec!["Last close".to_string(), format_price(last.price, rate)]);
    table.add_row(vec!["Trend".to_string(), analysis.trend.to_string()]);

    for ma in &analysis.moving_averages {
        let value = ma
            .points
            .last()
            .map_or(NOT_AVAILABLE.to_string(), |p| format_amount(p.value, rate));
        table.add_row(vec![format!("{}-day moving average", ma.window), value]);
    }

    table.add_row(vec![
        "Extreme returns".to_string(),
        analysis.extreme_returns.len().to_string(),
    ]);
    table
}

pub fn comparison_table(comparison: &PriceComparison, rate: Option<Decimal>) -> Table {
    let mut table = new_table(vec!["Comparison", "Value"]);
    table.add_row(vec![
        format!("#{} {}", comparison.from.index, comparison.from.date),
        format_price(comparison.from.price, rate),
    ]);
    table.add_row(vec![
        format!("#{} {}", comparison.to.index, comparison.to.date),
        format_price(comparison.to.price, rate),
    ]);
    table.add_row(vec![
        "Difference".to_string(),
        format_price(comparison.difference, rate),
    ]);
    table.add_row(vec![
        "Change".to_string(),
        format!("{:+.2}%", comparison.percentage_change),
    ]);
    table.add_row(vec!["Days between".to_string(), comparison.days_between.to_string()]);
    table.add_row(vec![
        "Annualized".to_string(),
        comparison
            .annualized_pct
            .map_or(NOT_AVAILABLE.to_string(), |pct| format!("{:+.2}%", pct)),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_and_tail_skips_the_middle() {
        let items: Vec<u32> = (0..20).collect();
        let picked: Vec<u32> = head_and_tail(&items, 3).into_iter().copied().collect();
        assert_eq!(picked, vec![0, 1, 2, 17, 18, 19]);

        let short: Vec<u32> = head_and_tail(&items[..5], 3).into_iter().copied().collect();
        assert_eq!(short, vec![0, 1, 2, 3, 4]);

        assert_eq!(head_and_tail(&items, usize::MAX).len(), 20);
    }

    #[test]
    fn missing_sections_render_as_not_available() {
        let rendered = summary_table(None, None).to_string();
        assert!(rendered.contains("Standard deviation"));
        assert!(rendered.contains(NOT_AVAILABLE));

        assert!(box_plot_table(None).to_string().contains(NOT_AVAILABLE));
        assert!(return_table(None, Some(5)).to_string().contains(NOT_AVAILABLE));
    }

    #[test]
    fn summary_shows_percentages() {
        let stats = SummaryStats {
            count: 3,
            min: -0.02,
            max: 0.03,
            mean: 0.01,
            variance: 0.0004,
            std_dev: 0.02,
        };
        let rendered = summary_table(Some(&stats), Some(VolatilityLevel::Medium)).to_string();
        assert!(rendered.contains("-0.020000 (-2.00%)"));
        assert!(rendered.contains("medium"));
    }
}
