use crate::cli;
use crate::config::{self, GaugeConfig};
use crate::io::output::create_writer;
use crate::io::reader::read_snapshot;
use crate::report::build_report;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct ReportConfig {
    pub snapshot: PathBuf,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run(cfg: ReportConfig) -> Result<()> {
    let gauge_config = resolve_config(cfg.config.as_deref())?;
    let snapshot = read_snapshot(&cfg.snapshot)?;
    log::debug!(
        "loaded snapshot: {} months, {} years",
        snapshot.months.len(),
        snapshot.years.len()
    );

    let report = build_report(&snapshot, &gauge_config)?;
    let mut writer = create_writer(cfg.output.as_deref(), cfg.format.into())?;
    writer.write_report(&report)
}

fn resolve_config(path: Option<&Path>) -> Result<GaugeConfig> {
    match path {
        Some(p) => Ok(config::load_config_from(p)?),
        None => Ok(config::load_config()),
    }
}
