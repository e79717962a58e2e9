use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// User-supplied inputs for a feasibility computation.
///
/// Bounds are enforced by [`ProjectParameters::validate`] before anything
/// reaches the engine; out-of-range values are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    /// Land area in square meters.
    pub land_area: f64,
    /// Buildable-to-land ratio set by zoning, 1.0 to 4.0.
    pub utilization_index: f64,
    /// Sellable share of built area, 0.0 to 1.0.
    pub private_to_built_ratio: f64,
    /// Direct construction cost per square meter of built area.
    pub direct_cost_per_sqm: f64,
    /// Average sale price per square meter of private area.
    pub avg_sale_price_per_sqm: f64,
    /// Scenario adjustment applied to the sale price, -20 to 20 percent.
    #[serde(default)]
    pub price_variation_pct: f64,
}

impl ProjectParameters {
    /// Check every documented bound, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("land_area", self.land_area)?;
        check_range(
            "utilization_index",
            self.utilization_index,
            1.0..=4.0,
            "must be between 1.0 and 4.0",
        )?;
        check_range(
            "private_to_built_ratio",
            self.private_to_built_ratio,
            0.0..=1.0,
            "must be between 0.0 and 1.0",
        )?;
        check_non_negative("direct_cost_per_sqm", self.direct_cost_per_sqm)?;
        check_non_negative("avg_sale_price_per_sqm", self.avg_sale_price_per_sqm)?;
        check_range(
            "price_variation_pct",
            self.price_variation_pct,
            -20.0..=20.0,
            "must be between -20 and 20",
        )?;
        Ok(())
    }
}

// NaN fails both comparisons below, so it is rejected like any other
// out-of-range value.
fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, value, "must be >= 0"))
    }
}

fn check_range(
    name: &'static str,
    value: f64,
    range: std::ops::RangeInclusive<f64>,
    constraint: &'static str,
) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, value, constraint))
    }
}

/// How an indirect cost line item is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndirectCostKind {
    /// Percentage of gross sales value.
    Percentage,
    /// Fixed monetary amount, independent of sales.
    FlatAmount,
}

/// One row of the indirect cost table.
///
/// Labels are unique within a project; row order is cosmetic, values are
/// summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndirectCostItem {
    pub label: String,
    pub kind: IndirectCostKind,
    pub value: f64,
}

impl IndirectCostItem {
    /// Line item contributing `value` percent of VGV.
    pub fn percentage(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            kind: IndirectCostKind::Percentage,
            value,
        }
    }

    /// Line item contributing a fixed monetary amount.
    pub fn flat(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            kind: IndirectCostKind::FlatAmount,
            value,
        }
    }
}

/// Derived snapshot of one feasibility computation.
///
/// Recomputed from scratch on every parameter change, never mutated in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    /// Sellable area in square meters.
    pub private_area: f64,
    /// Total constructed floor area in square meters.
    pub built_area: f64,
    /// Gross sales value.
    pub vgv: f64,
    pub direct_cost_total: f64,
    pub indirect_cost_total: f64,
    pub total_cost: f64,
    /// Net result: `vgv - total_cost`.
    pub business_result: f64,
    /// Zero when `vgv` is zero.
    pub profit_margin_pct: f64,
}

/// Tri-state classification of a signed metric for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    Positive,
    Negative,
    Neutral,
}

impl Outlook {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlook_classifies_sign() {
        assert_eq!(Outlook::of(1.5), Outlook::Positive);
        assert_eq!(Outlook::of(-0.01), Outlook::Negative);
        assert_eq!(Outlook::of(0.0), Outlook::Neutral);
    }

    #[test]
    fn validate_accepts_bounds_inclusive() {
        let params = ProjectParameters {
            land_area: 0.0,
            utilization_index: 4.0,
            private_to_built_ratio: 0.0,
            direct_cost_per_sqm: 0.0,
            avg_sale_price_per_sqm: 0.0,
            price_variation_pct: -20.0,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_rejects_nan() {
        let params = ProjectParameters {
            land_area: f64::NAN,
            utilization_index: 2.0,
            private_to_built_ratio: 0.7,
            direct_cost_per_sqm: 0.0,
            avg_sale_price_per_sqm: 0.0,
            price_variation_pct: 0.0,
        };
        assert!(params.validate().is_err());
    }
}
