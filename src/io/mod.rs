pub mod output;

pub use output::{create_writer, FeasibilityReport, OutputFormat, OutputWriter};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
