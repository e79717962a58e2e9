pub mod analyze;
pub mod init;
pub mod list_projects;
pub mod open;

use anyhow::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::store::JsonFileStore;

pub(crate) fn open_store(dir: Option<PathBuf>) -> Result<JsonFileStore> {
    let store = match dir {
        Some(dir) => JsonFileStore::open(dir)?,
        None => JsonFileStore::open_default()?,
    };
    Ok(store)
}

pub(crate) fn open_output(path: Option<PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout())),
    }
}
