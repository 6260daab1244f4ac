use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from("goalgauge.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Goalgauge configuration

# Months per aggregated group; 3 folds a year into quarters
quarter_group_size = 3
quarter_label_prefix = "Quarter"
currency_symbol = "$"

[year_bar]
cap = 99.0
min_extent = 40.0
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created goalgauge.toml configuration file");

    Ok(())
}
