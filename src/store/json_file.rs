use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{ProjectRecord, ProjectStore, SavePolicy, StoredProject};
use crate::errors::{Error, Result};

/// File-backed store: one pretty-printed JSON document per record.
///
/// Uniqueness is enforced by the file system. The create path opens the
/// record with `create_new`, so two racing saves cannot both succeed; the
/// overwrite path writes a sibling temp file and renames it over the old
/// record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| Error::store_with_source("Cannot create store directory", &root, e))?;
        Ok(Self { root })
    }

    /// Open the store at the per-user data directory.
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::open(base.join("lotmap").join("projects"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", escape_name(name)))
    }
}

/// Injective mapping from record names to file names. Bytes outside
/// `[A-Za-z0-9._-]` become `%XX`, so distinct names never collide on disk.
fn escape_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for &byte in name.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'-' => {
                escaped.push(byte as char)
            }
            _ => escaped.push_str(&format!("%{byte:02X}")),
        }
    }
    escaped
}

impl ProjectStore for JsonFileStore {
    fn save(&self, record: &ProjectRecord, policy: SavePolicy) -> Result<()> {
        let path = self.record_path(&record.name);
        let json = serde_json::to_vec_pretty(record)?;

        match policy {
            SavePolicy::RejectDuplicate => {
                let mut file = OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&path)
                    .map_err(|e| {
                        if e.kind() == ErrorKind::AlreadyExists {
                            Error::duplicate_name(&record.name)
                        } else {
                            Error::store_with_source("Cannot create record", &path, e)
                        }
                    })?;
                file.write_all(&json)
                    .map_err(|e| Error::store_with_source("Cannot write record", &path, e))?;
            }
            SavePolicy::Overwrite => {
                let tmp = path.with_extension("tmp");
                fs::write(&tmp, &json)
                    .map_err(|e| Error::store_with_source("Cannot write record", &tmp, e))?;
                fs::rename(&tmp, &path)
                    .map_err(|e| Error::store_with_source("Cannot replace record", &path, e))?;
            }
        }

        debug!("saved project `{}` to {}", record.name, path.display());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<ProjectRecord> {
        let path = self.record_path(name);
        let raw = fs::read(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::not_found(name)
            } else {
                Error::store_with_source("Cannot read record", &path, e)
            }
        })?;
        serde_json::from_slice(&raw)
            .map_err(|e| Error::store(format!("Corrupt record: {e}"), &path))
    }

    fn list(&self) -> Result<Vec<StoredProject>> {
        let entries = fs::read_dir(&self.root)
            .map_err(|e| Error::store_with_source("Cannot read store directory", &self.root, e))?;

        let mut projects = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                Error::store_with_source("Cannot read store directory", &self.root, e)
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            // Foreign or half-written files should not break the listing.
            let record: ProjectRecord = match fs::read(&path)
                .ok()
                .and_then(|raw| serde_json::from_slice(&raw).ok())
            {
                Some(record) => record,
                None => {
                    warn!("skipping unreadable record {}", path.display());
                    continue;
                }
            };
            projects.push(StoredProject {
                name: record.name,
                created_at: record.created_at,
            });
        }

        projects.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(projects)
    }
}
