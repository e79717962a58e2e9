//! Named project persistence.
//!
//! The engine only requires a save/load/list contract; [`JsonFileStore`] is
//! the bundled backend, one JSON document per record. Any key-value or
//! relational substrate satisfying [`ProjectStore`] works in its place.

mod json_file;

pub use json_file::JsonFileStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{IndirectCostItem, ProjectParameters};
use crate::errors::Result;

/// Persisted snapshot of a project, keyed by its unique name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub parameters: ProjectParameters,
    pub indirect_cost_items: Vec<IndirectCostItem>,
    pub created_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Snapshot a project as of now.
    pub fn new(
        name: impl Into<String>,
        parameters: ProjectParameters,
        indirect_cost_items: Vec<IndirectCostItem>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            indirect_cost_items,
            created_at: Utc::now(),
        }
    }
}

/// Behavior when saving under a name that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePolicy {
    /// Fail with [`crate::errors::Error::DuplicateName`] if the name is
    /// taken.
    RejectDuplicate,
    /// Replace any existing record atomically.
    Overwrite,
}

/// Listing entry: the name and creation time, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProject {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Contract the core requires from a persistence backend.
///
/// `save` must guarantee at-most-one record per name even under concurrent
/// callers; that obligation sits with the backend, not the engine.
pub trait ProjectStore {
    fn save(&self, record: &ProjectRecord, policy: SavePolicy) -> Result<()>;
    fn load(&self, name: &str) -> Result<ProjectRecord>;
    fn list(&self) -> Result<Vec<StoredProject>>;
}
