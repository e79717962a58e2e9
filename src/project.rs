//! Project definition files.
//!
//! A project file is the editable input form: the parameter set plus the
//! indirect cost table, in TOML. Loading validates every documented bound
//! before anything reaches the engine; out-of-range values are rejected,
//! never clamped.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{IndirectCostItem, IndirectCostKind, ProjectParameters};
use crate::errors::{Error, Result};

/// Raw project file as parsed from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    pub project: ProjectSection,
    #[serde(default)]
    pub parameters: ParametersSection,
    /// Indirect cost table; an absent section means no indirect costs.
    #[serde(default, rename = "indirect")]
    pub indirect_costs: Vec<IndirectCostEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametersSection {
    #[serde(default)]
    pub land_area: f64,
    #[serde(default = "default_utilization_index")]
    pub utilization_index: f64,
    #[serde(default = "default_private_to_built_ratio")]
    pub private_to_built_ratio: f64,
    #[serde(default)]
    pub direct_cost_per_sqm: f64,
    #[serde(default)]
    pub avg_sale_price_per_sqm: f64,
    #[serde(default)]
    pub price_variation_pct: f64,
}

impl Default for ParametersSection {
    fn default() -> Self {
        Self {
            land_area: 0.0,
            utilization_index: default_utilization_index(),
            private_to_built_ratio: default_private_to_built_ratio(),
            direct_cost_per_sqm: 0.0,
            avg_sale_price_per_sqm: 0.0,
            price_variation_pct: 0.0,
        }
    }
}

// Zoning floor; matches the input form's slider minimum.
fn default_utilization_index() -> f64 {
    1.0
}
// Typical sellable share for residential towers.
fn default_private_to_built_ratio() -> f64 {
    0.70
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndirectCostEntry {
    pub label: String,
    pub kind: IndirectCostKind,
    pub value: f64,
}

impl ProjectFile {
    /// Parse a project file from TOML source.
    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::config_message(format!("Invalid project file: {e}")))
    }

    /// Read, parse and validate a project file.
    pub fn load(path: &Path) -> Result<Project> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Cannot read project file: {e}"), path))?;
        let file: Self = toml::from_str(&raw)
            .map_err(|e| Error::config(format!("Cannot parse project file: {e}"), path))?;
        file.into_project()
    }

    /// Validate every bound and produce a typed project.
    pub fn into_project(self) -> Result<Project> {
        let name = validate_name(&self.project.name)?;

        let parameters = ProjectParameters {
            land_area: self.parameters.land_area,
            utilization_index: self.parameters.utilization_index,
            private_to_built_ratio: self.parameters.private_to_built_ratio,
            direct_cost_per_sqm: self.parameters.direct_cost_per_sqm,
            avg_sale_price_per_sqm: self.parameters.avg_sale_price_per_sqm,
            price_variation_pct: self.parameters.price_variation_pct,
        };
        parameters.validate()?;

        let indirect_costs = validate_indirect_table(self.indirect_costs)?;

        Ok(Project {
            name,
            parameters,
            indirect_costs,
        })
    }
}

/// A validated project, ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub parameters: ProjectParameters,
    pub indirect_costs: Vec<IndirectCostItem>,
}

impl Project {
    /// Replace the scenario price variation, e.g. from a CLI override.
    pub fn set_price_variation(&mut self, pct: f64) -> Result<()> {
        let candidate = ProjectParameters {
            price_variation_pct: pct,
            ..self.parameters
        };
        candidate.validate()?;
        self.parameters = candidate;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_project("project name must not be empty"));
    }
    if name.len() > 120 {
        return Err(Error::invalid_project(
            "project name must be at most 120 characters",
        ));
    }
    if name.contains(['/', '\\']) || name.chars().any(char::is_control) {
        return Err(Error::invalid_project(format!(
            "project name `{name}` contains path separators or control characters"
        )));
    }
    Ok(name.to_string())
}

fn validate_indirect_table(entries: Vec<IndirectCostEntry>) -> Result<Vec<IndirectCostItem>> {
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let label = entry.label.trim().to_string();
        if label.is_empty() {
            return Err(Error::invalid_project(
                "indirect cost entries must have a label",
            ));
        }
        if items
            .iter()
            .any(|existing: &IndirectCostItem| existing.label == label)
        {
            return Err(Error::invalid_project(format!(
                "duplicate indirect cost label `{label}`"
            )));
        }
        if !(entry.value >= 0.0) {
            return Err(Error::invalid_project(format!(
                "indirect cost `{label}` has invalid value {}",
                entry.value
            )));
        }
        items.push(IndirectCostItem {
            label,
            kind: entry.kind,
            value: entry.value,
        });
    }
    Ok(items)
}

/// The stock indirect cost table: VGV-percentage line items every new
/// project starts from.
pub fn default_indirect_table() -> Vec<IndirectCostItem> {
    vec![
        IndirectCostItem::percentage("Income and sales taxes", 4.00),
        IndirectCostItem::percentage("Brokerage", 3.61),
        IndirectCostItem::percentage("Advertising", 0.90),
        IndirectCostItem::percentage("Maintenance", 0.50),
        IndirectCostItem::percentage("Developer overhead", 4.00),
        IndirectCostItem::percentage("Technical advisory", 0.70),
        IndirectCostItem::percentage("Design fees", 0.52),
        IndirectCostItem::percentage("Licensing and incorporation", 0.20),
    ]
}

/// Starter project written by `lotmap init`.
pub const STARTER_PROJECT: &str = r#"# lotmap project definition

[project]
name = "New development"

[parameters]
# Land area in m².
land_area = 1000.0
# Buildable-to-land ratio set by zoning (1.0 to 4.0).
utilization_index = 2.0
# Sellable share of built area (0.0 to 1.0).
private_to_built_ratio = 0.70
# Direct construction cost per m² of built area.
direct_cost_per_sqm = 2000.0
# Average sale price per m² of sellable area.
avg_sale_price_per_sqm = 6000.0
# Scenario price adjustment in percent (-20 to 20).
price_variation_pct = 0.0

# Indirect costs, as a percentage of gross sales value ("percentage")
# or a fixed amount ("flat_amount").

[[indirect]]
label = "Income and sales taxes"
kind = "percentage"
value = 4.00

[[indirect]]
label = "Brokerage"
kind = "percentage"
value = 3.61

[[indirect]]
label = "Advertising"
kind = "percentage"
value = 0.90

[[indirect]]
label = "Maintenance"
kind = "percentage"
value = 0.50

[[indirect]]
label = "Developer overhead"
kind = "percentage"
value = 4.00

[[indirect]]
label = "Technical advisory"
kind = "percentage"
value = 0.70

[[indirect]]
label = "Design fees"
kind = "percentage"
value = 0.52

[[indirect]]
label = "Licensing and incorporation"
kind = "percentage"
value = 0.20

# Land and product costs are flat amounts:
#
# [[indirect]]
# label = "Land grant fee"
# kind = "flat_amount"
# value = 0.0
#
# [[indirect]]
# label = "Condominium fees"
# kind = "flat_amount"
# value = 0.0
#
# [[indirect]]
# label = "Property tax"
# kind = "flat_amount"
# value = 0.0
#
# [[indirect]]
# label = "Site preparation"
# kind = "flat_amount"
# value = 0.0
#
# [[indirect]]
# label = "Construction financing"
# kind = "flat_amount"
# value = 0.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_all_percentages() {
        let table = default_indirect_table();
        assert_eq!(table.len(), 8);
        assert!(table
            .iter()
            .all(|item| item.kind == IndirectCostKind::Percentage));
        let total: f64 = table.iter().map(|item| item.value).sum();
        assert!((total - 14.43).abs() < 1e-9);
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  Tower A  ").unwrap(), "Tower A");
    }

    #[test]
    fn name_rejects_separators() {
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
        assert!(validate_name("").is_err());
    }
}
