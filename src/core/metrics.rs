//! Goal-vs-actual performance computations.
//!
//! Every function here is a stateless, referentially transparent projection
//! of its inputs. Aggregation always sums actuals and goals independently
//! before dividing; averaging per-period percentages would let periods with
//! small goals distort the aggregate.

use super::errors::{Error, Result};
use super::{AggregatedPeriod, GoalStatus, PeriodMetric, PeriodRecord};

/// Percentage reported for a period with no usable data. Large enough for a
/// sliver of bar to render, small enough to read as empty.
pub const FALLBACK_PERCENT: i64 = 2;

/// Percentage of goal for one period.
///
/// Returns [`FALLBACK_PERCENT`] when the actual is missing or zero, or the
/// goal is zero. Negative and out-of-range values pass through the raw
/// arithmetic unchanged; the caller owns range validation.
pub fn compute_percentage(actual: Option<f64>, goal: f64) -> i64 {
    match actual {
        Some(a) if a != 0.0 && goal != 0.0 => (a / goal * 100.0).round() as i64,
        _ => FALLBACK_PERCENT,
    }
}

/// Classification used by renderers to pick a display treatment. Carries no
/// other behavior.
pub fn classify_status(actual: Option<f64>, goal: f64) -> GoalStatus {
    match actual {
        Some(a) if a != 0.0 && goal != 0.0 => {
            if a >= goal {
                GoalStatus::Met
            } else {
                GoalStatus::Under
            }
        }
        _ => GoalStatus::NoData,
    }
}

/// Metric projection of a single record.
pub fn metric_for(record: &PeriodRecord) -> PeriodMetric {
    PeriodMetric {
        label: record.label.clone(),
        percentage: compute_percentage(record.actual, record.goal),
        status: classify_status(record.actual, record.goal),
    }
}

/// Metric projections for an ordered sequence of records.
pub fn project(records: &[PeriodRecord]) -> Vec<PeriodMetric> {
    records.iter().map(metric_for).collect()
}

/// Group `records` into contiguous buckets of `group_size`, summing actuals
/// (absent treated as 0) and goals independently. Groups are labelled
/// positionally: "<label_prefix> 1", "<label_prefix> 2", ...
///
/// `group_size` must be positive and evenly partition the records.
pub fn aggregate(
    records: &[PeriodRecord],
    group_size: usize,
    label_prefix: &str,
) -> Result<Vec<AggregatedPeriod>> {
    if group_size == 0 {
        return Err(Error::InvalidArgument(
            "group size must be positive".to_string(),
        ));
    }
    if records.len() % group_size != 0 {
        return Err(Error::InvalidArgument(format!(
            "group size {} does not evenly partition {} records",
            group_size,
            records.len()
        )));
    }

    Ok(records
        .chunks(group_size)
        .enumerate()
        .map(|(idx, chunk)| {
            let (actual_sum, goal_sum) = chunk.iter().fold((0.0, 0.0), |(actual, goal), r| {
                (actual + r.actual.unwrap_or(0.0), goal + r.goal)
            });
            AggregatedPeriod {
                label: format!("{} {}", label_prefix, idx + 1),
                actual_sum,
                goal_sum,
            }
        })
        .collect())
}

/// Metric projection of an aggregated period, using the same fallback rule
/// as single periods.
pub fn aggregated_metric(period: &AggregatedPeriod) -> PeriodMetric {
    PeriodMetric {
        label: period.label.clone(),
        percentage: compute_percentage(Some(period.actual_sum), period.goal_sum),
        status: classify_status(Some(period.actual_sum), period.goal_sum),
    }
}

/// Smallest step multiple at or above the maximum observed percentage, used
/// as the axis ceiling by the rendering layer.
///
/// Fails on an empty sequence; falling back to 0 or 100 here would be a
/// silent guess about the chart's scale.
pub fn compute_display_max(percentages: &[i64]) -> Result<i64> {
    let max = percentages.iter().copied().max().ok_or_else(|| {
        Error::InvalidArgument(
            "cannot derive a display ceiling from an empty percentage sequence".to_string(),
        )
    })?;
    let step = display_step(max);
    Ok(((max as f64) / (step as f64)).ceil() as i64 * step)
}

fn display_step(max: i64) -> i64 {
    match max {
        m if m <= 200 => 20,
        m if m <= 500 => 50,
        _ => 100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_nearest_whole() {
        assert_eq!(compute_percentage(Some(60_000.0), 80_000.0), 75);
        assert_eq!(compute_percentage(Some(100.0), 101.0), 99);
        assert_eq!(compute_percentage(Some(400_000.0), 50_000.0), 800);
    }

    #[test]
    fn missing_or_zero_inputs_fall_back() {
        assert_eq!(compute_percentage(None, 130_000.0), FALLBACK_PERCENT);
        assert_eq!(compute_percentage(Some(0.0), 100.0), FALLBACK_PERCENT);
        assert_eq!(compute_percentage(Some(95_000.0), 0.0), FALLBACK_PERCENT);
        assert_eq!(compute_percentage(None, 0.0), FALLBACK_PERCENT);
    }

    #[test]
    fn negative_values_pass_through_raw_division() {
        // Documented quirk: no clamping or rejection of malformed ranges.
        assert_eq!(compute_percentage(Some(-50.0), 100.0), -50);
        assert_eq!(compute_percentage(Some(50.0), -100.0), -50);
        assert_eq!(classify_status(Some(-50.0), 100.0), GoalStatus::Under);
        assert_eq!(classify_status(Some(50.0), -100.0), GoalStatus::Met);
    }

    #[test]
    fn status_boundary_is_goal_inclusive() {
        assert_eq!(classify_status(Some(90_000.0), 90_000.0), GoalStatus::Met);
        assert_eq!(classify_status(Some(89_999.0), 90_000.0), GoalStatus::Under);
        assert_eq!(classify_status(None, 90_000.0), GoalStatus::NoData);
        assert_eq!(classify_status(Some(95_000.0), 0.0), GoalStatus::NoData);
    }

    #[test]
    fn aggregate_sums_before_dividing() {
        // Averaging the per-period percentages {2, 100} would give 51; the
        // summed ratio gives 99. The two must differ.
        let records = vec![
            PeriodRecord::new("Jan", Some(0.0), 1.0),
            PeriodRecord::new("Feb", Some(100.0), 100.0),
        ];
        let groups = aggregate(&records, 2, "Group").unwrap();
        assert_eq!(groups.len(), 1);
        let metric = aggregated_metric(&groups[0]);
        assert_eq!(metric.percentage, 99);
    }

    #[test]
    fn aggregate_rejects_bad_group_sizes() {
        let records: Vec<PeriodRecord> = (0..12)
            .map(|i| PeriodRecord::new(format!("M{i}"), Some(1.0), 1.0))
            .collect();
        assert!(aggregate(&records, 0, "Quarter").is_err());
        assert!(aggregate(&records, 5, "Quarter").is_err());
        assert_eq!(aggregate(&records, 3, "Quarter").unwrap().len(), 4);
    }

    #[test]
    fn aggregate_treats_missing_actuals_as_zero() {
        let records = vec![
            PeriodRecord::new("Jul", Some(95_000.0), 0.0),
            PeriodRecord::new("Aug", None, 130_000.0),
            PeriodRecord::new("Sep", Some(85_000.0), 100_000.0),
        ];
        let groups = aggregate(&records, 3, "Quarter").unwrap();
        assert_eq!(groups[0].label, "Quarter 1");
        assert_eq!(groups[0].actual_sum, 180_000.0);
        assert_eq!(groups[0].goal_sum, 230_000.0);
    }

    #[test]
    fn display_max_steps_with_range() {
        assert_eq!(compute_display_max(&[55, 99]).unwrap(), 100);
        assert_eq!(compute_display_max(&[250]).unwrap(), 250);
        assert_eq!(compute_display_max(&[600]).unwrap(), 600);
        // Exact multiples are kept, not bumped to the next step.
        assert_eq!(compute_display_max(&[200]).unwrap(), 200);
        assert_eq!(compute_display_max(&[201]).unwrap(), 250);
        assert_eq!(compute_display_max(&[FALLBACK_PERCENT]).unwrap(), 20);
    }

    #[test]
    fn display_max_rejects_empty_input() {
        assert!(matches!(
            compute_display_max(&[]),
            Err(Error::InvalidArgument(_))
        ));
    }
}
