use anyhow::Result;
use log::info;
use std::path::PathBuf;

use super::{open_output, open_store};
use crate::core::{compute, indirect_cost_lines};
use crate::io::output::{create_writer, FeasibilityReport, OutputFormat};
use crate::project::ProjectFile;
use crate::store::{ProjectRecord, ProjectStore, SavePolicy};

pub struct AnalyzeConfig {
    pub project: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub price_variation: Option<f64>,
    pub save: bool,
    pub force: bool,
    pub store_dir: Option<PathBuf>,
}

pub fn run(config: AnalyzeConfig) -> Result<()> {
    let mut project = ProjectFile::load(&config.project)?;
    if let Some(pct) = config.price_variation {
        project.set_price_variation(pct)?;
    }

    let result = compute(&project.parameters, &project.indirect_costs);
    info!("computed feasibility for `{}`", project.name);

    if config.save {
        let store = open_store(config.store_dir)?;
        let policy = if config.force {
            SavePolicy::Overwrite
        } else {
            SavePolicy::RejectDuplicate
        };
        let record = ProjectRecord::new(
            project.name.clone(),
            project.parameters,
            project.indirect_costs.clone(),
        );
        store.save(&record, policy)?;
        eprintln!("Saved project `{}`", project.name);
    }

    let lines = indirect_cost_lines(&project.indirect_costs, result.vgv);
    let report = FeasibilityReport::new(project.name, project.parameters, lines, result);

    let out = open_output(config.output)?;
    create_writer(config.format, out).write_report(&report)?;
    Ok(())
}
