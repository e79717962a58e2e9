use anyhow::Result;
use std::path::PathBuf;

use super::{open_output, open_store};
use crate::core::{compute, indirect_cost_lines, ProjectParameters};
use crate::io::output::{create_writer, FeasibilityReport, OutputFormat};
use crate::store::ProjectStore;

pub struct OpenConfig {
    pub name: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub price_variation: Option<f64>,
    pub store_dir: Option<PathBuf>,
}

pub fn run(config: OpenConfig) -> Result<()> {
    let store = open_store(config.store_dir)?;
    let record = store.load(&config.name)?;

    // Records are plain JSON on disk and may have been edited by hand;
    // re-validate before anything reaches the engine.
    let parameters = match config.price_variation {
        Some(pct) => ProjectParameters {
            price_variation_pct: pct,
            ..record.parameters
        },
        None => record.parameters,
    };
    parameters.validate()?;

    let result = compute(&parameters, &record.indirect_cost_items);
    let lines = indirect_cost_lines(&record.indirect_cost_items, result.vgv);
    let report = FeasibilityReport::new(record.name, parameters, lines, result);

    let out = open_output(config.output)?;
    create_writer(config.format, out).write_report(&report)?;
    Ok(())
}
