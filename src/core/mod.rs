pub mod errors;
pub mod metrics;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

/// A single reporting period (typically a month) pairing a recorded actual
/// value with the goal it is measured against. Inputs are never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub label: String,
    /// Recorded value; `None` when nothing was recorded for the period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    pub goal: f64,
}

impl PeriodRecord {
    pub fn new(label: impl Into<String>, actual: Option<f64>, goal: f64) -> Self {
        Self {
            label: label.into(),
            actual,
            goal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    NoData, // actual missing/zero, or goal zero
    Under,  // actual below goal
    Met,    // actual at or above goal
}

/// Derived view of one period: its percentage of goal and classification.
/// Recomputed on every call; never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodMetric {
    pub label: String,
    pub percentage: i64,
    pub status: GoalStatus,
}

/// A coarser bucket formed by summing a contiguous group of periods'
/// actual and goal values independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPeriod {
    pub label: String,
    pub actual_sum: f64,
    pub goal_sum: f64,
}

/// Pre-summed figures for one calendar year, supplied by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,
    pub actual_sum: f64,
    pub goal_sum: f64,
}

/// Input document: monthly records plus optional yearly comparison sums.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    #[serde(default)]
    pub months: Vec<PeriodRecord>,
    #[serde(default)]
    pub years: Vec<YearlySummary>,
}

/// One month in the assembled report, carrying everything a bar renderer
/// needs: the metric, the fill swatch, axis tick text, and hover text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthEntry {
    pub record: PeriodRecord,
    pub metric: PeriodMetric,
    pub swatch: String,
    /// Two-line x-axis tick: month label over the formatted goal.
    pub tick: [String; 2],
    /// Formatted actual for the value label above the bar, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_label: Option<String>,
    pub tooltip: Vec<String>,
}

/// One quarter row: aggregated sums, metric, and the clamped progress value
/// a determinate progress bar renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuarterEntry {
    pub period: AggregatedPeriod,
    pub metric: PeriodMetric,
    /// Determinate progress value, clamped to 0..=100.
    pub progress: u8,
    pub swatch: String,
    pub actual_label: String,
    pub goal_label: String,
}

/// One year-over-year comparison bar: drawable extent plus its caption.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearEntry {
    pub summary: YearlySummary,
    pub extent: f64,
    pub caption: String,
    /// Sliver bars are too narrow for their caption; it moves outside.
    pub label_inside: bool,
}

/// Chart-ready report over one snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub generated_at: DateTime<Utc>,
    pub months: Vector<MonthEntry>,
    pub quarters: Vector<QuarterEntry>,
    pub years: Vector<YearEntry>,
    /// Axis ceiling for the monthly chart, from [`metrics::compute_display_max`].
    pub axis_max: i64,
}
