//! Chart-model projections consumed by rendering layers.
//!
//! Everything here is pure text and geometry: colors come back as hex
//! swatches, extents as plain numbers. Pixels, CSS, and interaction stay
//! with the caller.

use crate::core::errors::Result;
use crate::core::metrics::{self, FALLBACK_PERCENT};
use crate::core::{GoalStatus, PeriodMetric, PeriodRecord, YearlySummary};
use crate::formatting;
use serde::{Deserialize, Serialize};

pub const MET_SWATCH: &str = "#57B77D";
pub const UNDER_SWATCH: &str = "#F16A4F";
pub const NO_DATA_SWATCH: &str = "#000000";
pub const NEUTRAL_SWATCH: &str = "#EDEDED";

/// Bar fill for the monthly performance chart.
pub fn bar_palette(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::NoData => NO_DATA_SWATCH,
        GoalStatus::Met => MET_SWATCH,
        GoalStatus::Under => UNDER_SWATCH,
    }
}

/// Determinate progress value for quarter rows. Overshoot is capped so the
/// bar fills exactly once at 100%.
pub fn progress_value(percentage: i64) -> u8 {
    percentage.clamp(0, 100) as u8
}

/// Fill for quarter progress rows. Unlike the bar chart, a quarter without
/// usable data is neutral grey rather than black.
pub fn progress_palette(metric: &PeriodMetric) -> &'static str {
    if metric.status == GoalStatus::NoData || metric.percentage == 0 {
        return NEUTRAL_SWATCH;
    }
    match metric.status {
        GoalStatus::Met => MET_SWATCH,
        _ => UNDER_SWATCH,
    }
}

/// Extent tuning for the year-over-year comparison bars.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearBarOptions {
    /// Upper bound of the drawable extent; kept below 100 so the caption
    /// fits inside the track.
    pub cap: f64,
    /// Bars shorter than this are stretched up to stay visible.
    pub min_extent: f64,
}

impl Default for YearBarOptions {
    fn default() -> Self {
        Self {
            cap: 99.0,
            min_extent: 40.0,
        }
    }
}

/// Drawable extent (0..=cap) of one year's comparison bar.
pub fn year_bar_extent(summary: &YearlySummary, opts: YearBarOptions) -> f64 {
    let ratio = if summary.goal_sum == 0.0 {
        0.0
    } else {
        summary.actual_sum / summary.goal_sum
    };
    let extent = ratio.min(1.0) * opts.cap;
    if extent < opts.min_extent {
        opts.min_extent
    } else {
        extent
    }
}

/// Caption drawn on a year bar: "$actual / $goal".
pub fn year_bar_caption(summary: &YearlySummary, currency_symbol: &str) -> String {
    format!(
        "{} / {}",
        formatting::format_currency(summary.actual_sum, currency_symbol),
        formatting::format_currency(summary.goal_sum, currency_symbol)
    )
}

/// Sliver bars are too narrow to hold their caption; it moves outside.
pub fn label_inside_bar(extent: f64) -> bool {
    extent > FALLBACK_PERCENT as f64
}

/// Hover text for a monthly bar: the raw actual, then either the actual
/// percentage or an insufficient-data notice.
pub fn tooltip_lines(record: &PeriodRecord) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    match record.actual {
        Some(actual) => lines.push(format!("Actual: {actual}")),
        None => lines.push("Actual: N/A".to_string()),
    }
    if metrics::classify_status(record.actual, record.goal) == GoalStatus::NoData {
        lines.push("Insufficient data".to_string());
    } else {
        lines.push(format!(
            "Actual %: {}%",
            metrics::compute_percentage(record.actual, record.goal)
        ));
    }
    lines
}

/// Two-line x-axis tick: month label over the formatted goal.
pub fn axis_tick(record: &PeriodRecord, currency_symbol: &str) -> [String; 2] {
    [
        record.label.clone(),
        formatting::format_currency(record.goal, currency_symbol),
    ]
}

/// Axis ceiling for a set of monthly records.
pub fn axis_max(records: &[PeriodRecord]) -> Result<i64> {
    let percentages: Vec<i64> = records
        .iter()
        .map(|r| metrics::compute_percentage(r.actual, r.goal))
        .collect();
    metrics::compute_display_max(&percentages)
}
