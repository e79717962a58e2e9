use anyhow::Result;
use clap::Parser;
use lotmap::cli::{Cli, Commands};
use lotmap::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            project,
            format,
            output,
            price_variation,
            save,
            force,
            store_dir,
        } => commands::analyze::run(commands::analyze::AnalyzeConfig {
            project,
            format,
            output,
            price_variation,
            save,
            force,
            store_dir,
        }),
        Commands::Open {
            name,
            format,
            output,
            price_variation,
            store_dir,
        } => commands::open::run(commands::open::OpenConfig {
            name,
            format,
            output,
            price_variation,
            store_dir,
        }),
        Commands::List { format, store_dir } => {
            commands::list_projects::run(commands::list_projects::ListConfig { format, store_dir })
        }
        Commands::Init { path, force } => commands::init::run(&path, force),
    }
}
