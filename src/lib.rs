// Export modules for library usage
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    AggregatedPeriod, GoalStatus, MonthEntry, PerformanceReport, PerformanceSnapshot,
    PeriodMetric, PeriodRecord, QuarterEntry, YearEntry, YearlySummary,
};

pub use crate::core::metrics::{
    aggregate, aggregated_metric, classify_status, compute_display_max, compute_percentage,
    metric_for, project, FALLBACK_PERCENT,
};

pub use crate::core::errors::{Error, Result};

pub use crate::config::GaugeConfig;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::report::build_report;
