//! Display configuration, loaded from `goalgauge.toml` when present.
//!
//! Every field has a serde default, so an empty or missing file yields the
//! stock configuration. Invalid files fall back to defaults with a warning;
//! an explicitly passed path fails loudly instead.

use crate::chart::YearBarOptions;
use crate::core::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE_NAME: &str = "goalgauge.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    /// Months per aggregated group (3 folds a year into quarters)
    #[serde(default = "default_quarter_group_size")]
    pub quarter_group_size: usize,

    /// Positional label prefix for aggregated groups
    #[serde(default = "default_quarter_label_prefix")]
    pub quarter_label_prefix: String,

    /// Symbol prepended to currency labels
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Year-over-year comparison bar tuning
    #[serde(default)]
    pub year_bar: YearBarConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBarConfig {
    /// Upper bound of the drawable extent (0-100)
    #[serde(default = "default_year_bar_cap")]
    pub cap: f64,

    /// Minimum visible extent for short bars
    #[serde(default = "default_year_bar_min_extent")]
    pub min_extent: f64,
}

fn default_quarter_group_size() -> usize {
    3
}

fn default_quarter_label_prefix() -> String {
    "Quarter".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_year_bar_cap() -> f64 {
    99.0
}

fn default_year_bar_min_extent() -> f64 {
    40.0
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            quarter_group_size: default_quarter_group_size(),
            quarter_label_prefix: default_quarter_label_prefix(),
            currency_symbol: default_currency_symbol(),
            year_bar: YearBarConfig::default(),
        }
    }
}

impl Default for YearBarConfig {
    fn default() -> Self {
        Self {
            cap: default_year_bar_cap(),
            min_extent: default_year_bar_min_extent(),
        }
    }
}

impl GaugeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.quarter_group_size == 0 {
            return Err(Error::Configuration(
                "quarter_group_size must be positive".to_string(),
            ));
        }
        self.year_bar.validate()
    }
}

impl YearBarConfig {
    fn validate(&self) -> Result<()> {
        if !(self.min_extent > 0.0 && self.min_extent <= self.cap && self.cap <= 100.0) {
            return Err(Error::Configuration(format!(
                "year_bar extents must satisfy 0 < min_extent <= cap <= 100 (min_extent {}, cap {})",
                self.min_extent, self.cap
            )));
        }
        Ok(())
    }

    pub fn options(&self) -> YearBarOptions {
        YearBarOptions {
            cap: self.cap,
            min_extent: self.min_extent,
        }
    }
}

static CONFIG: OnceLock<GaugeConfig> = OnceLock::new();

fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

fn parse_and_validate_config(contents: &str) -> std::result::Result<GaugeConfig, String> {
    let config = toml::from_str::<GaugeConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<GaugeConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "file not found" is the common case while walking ancestors
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search the working directory and its ancestors for `goalgauge.toml`,
/// falling back to defaults when none is found or readable.
pub fn load_config() -> GaugeConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return GaugeConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Load from an explicit path. Unlike discovery, failures here are errors.
pub fn load_config_from(path: &Path) -> Result<GaugeConfig> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str::<GaugeConfig>(&contents)
        .map_err(|e| Error::Configuration(format!("{}: {e}", path.display())))?;
    config.validate()?;
    Ok(config)
}

/// Get the cached configuration
pub fn get_config() -> &'static GaugeConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, GaugeConfig::default());
        assert_eq!(config.quarter_group_size, 3);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.year_bar.cap, 99.0);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let contents = indoc! {r#"
            currency_symbol = "€"

            [year_bar]
            min_extent = 25.0
        "#};
        let config = parse_and_validate_config(contents).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.year_bar.min_extent, 25.0);
        assert_eq!(config.year_bar.cap, 99.0);
        assert_eq!(config.quarter_label_prefix, "Quarter");
    }

    #[test]
    fn invalid_extents_are_rejected() {
        let contents = indoc! {r#"
            [year_bar]
            cap = 120.0
        "#};
        assert!(parse_and_validate_config(contents).is_err());

        let contents = indoc! {r#"
            [year_bar]
            min_extent = 0.0
        "#};
        assert!(parse_and_validate_config(contents).is_err());
    }

    #[test]
    fn zero_group_size_is_rejected() {
        assert!(parse_and_validate_config("quarter_group_size = 0").is_err());
    }

    #[test]
    fn explicit_path_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "quarter_label_prefix = \"Q\"").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.quarter_label_prefix, "Q");

        let missing = dir.path().join("nope.toml");
        assert!(matches!(load_config_from(&missing), Err(Error::Io { .. })));
    }
}
