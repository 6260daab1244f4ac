//! Snapshot input parsing.

use crate::core::errors::{Error, Result};
use crate::core::PerformanceSnapshot;
use std::fs;
use std::path::Path;

/// Read a snapshot document from a JSON file. Errors carry the offending
/// path for both I/O and parse failures.
pub fn read_snapshot(path: &Path) -> Result<PerformanceSnapshot> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_snapshot(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_snapshot(contents: &str) -> serde_json::Result<PerformanceSnapshot> {
    serde_json::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PeriodRecord;
    use indoc::indoc;

    #[test]
    fn parses_months_with_missing_actuals() {
        let contents = indoc! {r#"
            {
                "months": [
                    { "label": "Jul", "actual": 95000, "goal": 0 },
                    { "label": "Aug", "goal": 130000 }
                ]
            }
        "#};
        let snapshot = parse_snapshot(contents).unwrap();
        assert_eq!(
            snapshot.months,
            vec![
                PeriodRecord::new("Jul", Some(95_000.0), 0.0),
                PeriodRecord::new("Aug", None, 130_000.0),
            ]
        );
        assert!(snapshot.years.is_empty());
    }

    #[test]
    fn parses_yearly_sums() {
        let contents = indoc! {r#"
            {
                "months": [],
                "years": [
                    { "year": 2023, "actual_sum": 900000, "goal_sum": 1100000 }
                ]
            }
        "#};
        let snapshot = parse_snapshot(contents).unwrap();
        assert_eq!(snapshot.years.len(), 1);
        assert_eq!(snapshot.years[0].year, 2023);
    }

    #[test]
    fn read_snapshot_reports_the_path() {
        let err = read_snapshot(Path::new("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
