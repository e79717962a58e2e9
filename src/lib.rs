// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod project;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    compute, compute_areas, compute_costs, compute_vgv, AreaBreakdown, CostBreakdown,
    FeasibilityResult, IndirectCostItem, IndirectCostKind, IndirectCostLine, Outlook,
    ProjectParameters,
};

pub use crate::errors::{Error, Result};

pub use crate::io::output::{create_writer, FeasibilityReport, OutputFormat, OutputWriter};

pub use crate::project::{default_indirect_table, Project, ProjectFile};

pub use crate::store::{JsonFileStore, ProjectRecord, ProjectStore, SavePolicy, StoredProject};
