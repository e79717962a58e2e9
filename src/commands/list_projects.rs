use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::path::PathBuf;

use super::open_store;
use crate::io::output::OutputFormat;
use crate::store::ProjectStore;

pub struct ListConfig {
    pub format: OutputFormat,
    pub store_dir: Option<PathBuf>,
}

pub fn run(config: ListConfig) -> Result<()> {
    let store = open_store(config.store_dir)?;
    let projects = store.list()?;

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&projects)?);
        }
        OutputFormat::Markdown => {
            println!("| Project | Created |");
            println!("|---------|---------|");
            for project in &projects {
                println!(
                    "| {} | {} |",
                    project.name,
                    project.created_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
        }
        OutputFormat::Terminal => {
            if projects.is_empty() {
                println!("No saved projects yet. Use `lotmap analyze --save` to create one.");
                return Ok(());
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Project", "Created"]);
            for project in &projects {
                table.add_row(vec![
                    project.name.clone(),
                    project
                        .created_at
                        .format("%Y-%m-%d %H:%M:%S UTC")
                        .to_string(),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
