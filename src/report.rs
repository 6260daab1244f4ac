//! Report assembly: projects one snapshot through the metrics and chart
//! modules into a chart-ready document.

use crate::chart;
use crate::config::GaugeConfig;
use crate::core::errors::Result;
use crate::core::metrics;
use crate::core::{
    MonthEntry, PerformanceReport, PerformanceSnapshot, QuarterEntry, YearEntry,
};
use crate::formatting;
use chrono::Utc;
use im::Vector;

pub fn build_report(
    snapshot: &PerformanceSnapshot,
    config: &GaugeConfig,
) -> Result<PerformanceReport> {
    config.validate()?;
    let symbol = config.currency_symbol.as_str();

    let months: Vector<MonthEntry> = snapshot
        .months
        .iter()
        .map(|record| {
            let metric = metrics::metric_for(record);
            MonthEntry {
                swatch: chart::bar_palette(metric.status).to_string(),
                tick: chart::axis_tick(record, symbol),
                actual_label: record
                    .actual
                    .map(|actual| formatting::format_currency(actual, symbol)),
                tooltip: chart::tooltip_lines(record),
                metric,
                record: record.clone(),
            }
        })
        .collect();

    let axis_max = chart::axis_max(&snapshot.months)?;

    let quarters: Vector<QuarterEntry> = metrics::aggregate(
        &snapshot.months,
        config.quarter_group_size,
        &config.quarter_label_prefix,
    )?
    .into_iter()
    .map(|period| {
        let metric = metrics::aggregated_metric(&period);
        QuarterEntry {
            progress: chart::progress_value(metric.percentage),
            swatch: chart::progress_palette(&metric).to_string(),
            actual_label: formatting::format_currency(period.actual_sum, symbol),
            goal_label: formatting::format_currency(period.goal_sum, symbol),
            metric,
            period,
        }
    })
    .collect();

    let opts = config.year_bar.options();
    let years: Vector<YearEntry> = snapshot
        .years
        .iter()
        .map(|summary| {
            let extent = chart::year_bar_extent(summary, opts);
            YearEntry {
                caption: chart::year_bar_caption(summary, symbol),
                label_inside: chart::label_inside_bar(extent),
                extent,
                summary: summary.clone(),
            }
        })
        .collect();

    Ok(PerformanceReport {
        generated_at: Utc::now(),
        months,
        quarters,
        years,
        axis_max,
    })
}
