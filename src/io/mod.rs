pub mod output;
pub mod reader;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use reader::{parse_snapshot, read_snapshot};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
