use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "lotmap")]
#[command(about = "Real estate development feasibility analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute feasibility metrics for a project file
    Analyze {
        /// Path to the project definition (TOML)
        project: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the scenario price variation, in percent (-20 to 20)
        #[arg(long = "price-variation", allow_hyphen_values = true)]
        price_variation: Option<f64>,

        /// Persist the project under its name after computing
        #[arg(long)]
        save: bool,

        /// Overwrite an existing record when saving
        #[arg(long, requires = "save")]
        force: bool,

        /// Project store directory
        #[arg(long = "store-dir", env = "LOTMAP_STORE_DIR")]
        store_dir: Option<PathBuf>,
    },

    /// Load a saved project and recompute its feasibility
    Open {
        /// Name the project was saved under
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the scenario price variation, in percent (-20 to 20)
        #[arg(long = "price-variation", allow_hyphen_values = true)]
        price_variation: Option<f64>,

        /// Project store directory
        #[arg(long = "store-dir", env = "LOTMAP_STORE_DIR")]
        store_dir: Option<PathBuf>,
    },

    /// List saved projects
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Project store directory
        #[arg(long = "store-dir", env = "LOTMAP_STORE_DIR")]
        store_dir: Option<PathBuf>,
    },

    /// Write a starter project file
    Init {
        /// Destination path
        #[arg(default_value = "lotmap.toml")]
        path: PathBuf,

        /// Force overwrite existing file
        #[arg(short, long)]
        force: bool,
    },
}
