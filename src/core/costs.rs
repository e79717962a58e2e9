use serde::Serialize;

use super::types::{IndirectCostItem, IndirectCostKind};

/// Direct and indirect cost totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub direct_cost_total: f64,
    pub indirect_cost_total: f64,
}

/// One indirect cost row resolved to a monetary amount for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndirectCostLine {
    pub label: String,
    pub kind: IndirectCostKind,
    pub value: f64,
    pub amount: f64,
}

/// Monetary contribution of a single line item against a given VGV.
pub fn indirect_cost_amount(item: &IndirectCostItem, vgv: f64) -> f64 {
    match item.kind {
        IndirectCostKind::Percentage => vgv * item.value / 100.0,
        IndirectCostKind::FlatAmount => item.value,
    }
}

/// Resolve every line item to its monetary amount, in table order.
pub fn indirect_cost_lines(items: &[IndirectCostItem], vgv: f64) -> Vec<IndirectCostLine> {
    items
        .iter()
        .map(|item| IndirectCostLine {
            label: item.label.clone(),
            kind: item.kind,
            value: item.value,
            amount: indirect_cost_amount(item, vgv),
        })
        .collect()
}

/// Compute direct construction cost and the aggregated indirect cost table.
///
/// Summation order does not affect the mathematical result; floating-point
/// rounding noise across orders is acceptable.
pub fn compute_costs(
    built_area: f64,
    direct_cost_per_sqm: f64,
    items: &[IndirectCostItem],
    vgv: f64,
) -> CostBreakdown {
    let direct_cost_total = built_area * direct_cost_per_sqm;
    let indirect_cost_total = items
        .iter()
        .map(|item| indirect_cost_amount(item, vgv))
        .sum();

    CostBreakdown {
        direct_cost_total,
        indirect_cost_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_items_scale_with_vgv() {
        let item = IndirectCostItem::percentage("Brokerage", 3.61);
        assert!((indirect_cost_amount(&item, 1_000_000.0) - 36_100.0).abs() < 1e-6);
        assert_eq!(indirect_cost_amount(&item, 0.0), 0.0);
    }

    #[test]
    fn flat_items_ignore_vgv() {
        let item = IndirectCostItem::flat("Property tax", 12_500.0);
        assert_eq!(indirect_cost_amount(&item, 0.0), 12_500.0);
        assert_eq!(indirect_cost_amount(&item, 9_000_000.0), 12_500.0);
    }

    #[test]
    fn lines_keep_table_order() {
        let items = vec![
            IndirectCostItem::percentage("Advertising", 0.9),
            IndirectCostItem::flat("Site preparation", 80_000.0),
        ];
        let lines = indirect_cost_lines(&items, 2_000_000.0);
        assert_eq!(lines[0].label, "Advertising");
        assert_eq!(lines[0].amount, 18_000.0);
        assert_eq!(lines[1].label, "Site preparation");
        assert_eq!(lines[1].amount, 80_000.0);
    }
}
