use super::area::compute_areas;
use super::costs::compute_costs;
use super::revenue::{adjusted_sale_price, compute_vgv};
use super::types::{FeasibilityResult, IndirectCostItem, ProjectParameters};

/// Run the full feasibility computation over validated parameters.
///
/// Pure and deterministic: identical inputs produce bit-identical results,
/// so callers simply recompute on every parameter change. Bounds are
/// enforced by [`ProjectParameters::validate`] at the input boundary; debug
/// builds assert them here, release builds perform plain IEEE arithmetic on
/// whatever they are handed.
pub fn compute(params: &ProjectParameters, items: &[IndirectCostItem]) -> FeasibilityResult {
    debug_assert!(
        params.validate().is_ok(),
        "unvalidated parameters reached the engine"
    );

    let areas = compute_areas(
        params.land_area,
        params.utilization_index,
        params.private_to_built_ratio,
    );
    let sale_price = adjusted_sale_price(params.avg_sale_price_per_sqm, params.price_variation_pct);
    let vgv = compute_vgv(areas.private_area, sale_price);
    let costs = compute_costs(areas.built_area, params.direct_cost_per_sqm, items, vgv);

    let total_cost = costs.direct_cost_total + costs.indirect_cost_total;
    let business_result = vgv - total_cost;
    let profit_margin_pct = if vgv == 0.0 {
        0.0
    } else {
        business_result / vgv * 100.0
    };

    FeasibilityResult {
        private_area: areas.private_area,
        built_area: areas.built_area,
        vgv,
        direct_cost_total: costs.direct_cost_total,
        indirect_cost_total: costs.indirect_cost_total,
        total_cost,
        business_result,
        profit_margin_pct,
    }
}
