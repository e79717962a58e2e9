use anyhow::Result;
use std::path::Path;

use crate::io;
use crate::project::STARTER_PROJECT;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Project file already exists. Use --force to overwrite.");
    }

    io::write_file(path, STARTER_PROJECT)?;
    println!("Created {} starter project", path.display());

    Ok(())
}
