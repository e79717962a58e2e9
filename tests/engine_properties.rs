//! Property-based tests for the feasibility engine.
//!
//! These verify invariants that should hold for all valid inputs:
//! - Cost and result aggregation identities
//! - The defined zero-result edge cases (ratio == 0, vgv == 0)
//! - Determinism of recomputation
//! - Flat-amount items are independent of sales value

use lotmap::core::{compute, IndirectCostItem, ProjectParameters};
use proptest::prelude::*;

fn parameters() -> impl Strategy<Value = ProjectParameters> {
    (
        0.0..50_000.0f64,
        1.0..=4.0f64,
        0.0..=1.0f64,
        0.0..10_000.0f64,
        0.0..20_000.0f64,
        -20.0..=20.0f64,
    )
        .prop_map(
            |(land, index, ratio, cost, price, variation)| ProjectParameters {
                land_area: land,
                utilization_index: index,
                private_to_built_ratio: ratio,
                direct_cost_per_sqm: cost,
                avg_sale_price_per_sqm: price,
                price_variation_pct: variation,
            },
        )
}

fn indirect_items() -> impl Strategy<Value = Vec<IndirectCostItem>> {
    prop::collection::vec(
        prop_oneof![
            (0.0..30.0f64).prop_map(|value| IndirectCostItem::percentage("item", value)),
            (0.0..2_000_000.0f64).prop_map(|value| IndirectCostItem::flat("item", value)),
        ],
        0..8,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, mut item)| {
                item.label = format!("item-{i}");
                item
            })
            .collect()
    })
}

proptest! {
    /// Property: total cost is exactly the sum of its two components.
    #[test]
    fn prop_total_cost_identity(params in parameters(), items in indirect_items()) {
        let result = compute(&params, &items);
        prop_assert_eq!(
            result.total_cost,
            result.direct_cost_total + result.indirect_cost_total
        );
    }

    /// Property: business result is exactly vgv minus total cost.
    #[test]
    fn prop_business_result_identity(params in parameters(), items in indirect_items()) {
        let result = compute(&params, &items);
        prop_assert_eq!(result.business_result, result.vgv - result.total_cost);
    }

    /// Property: margin is zero when vgv is zero, the exact ratio otherwise.
    #[test]
    fn prop_margin_definition(params in parameters(), items in indirect_items()) {
        let result = compute(&params, &items);
        if result.vgv == 0.0 {
            prop_assert_eq!(result.profit_margin_pct, 0.0);
        } else {
            prop_assert_eq!(
                result.profit_margin_pct,
                result.business_result / result.vgv * 100.0
            );
        }
    }

    /// Property: built area is private area over the ratio, zero when the
    /// ratio is zero.
    #[test]
    fn prop_built_area_law(params in parameters()) {
        let result = compute(&params, &[]);
        if params.private_to_built_ratio > 0.0 {
            prop_assert_eq!(
                result.built_area,
                result.private_area / params.private_to_built_ratio
            );
        } else {
            prop_assert_eq!(result.built_area, 0.0);
        }
    }

    /// Property: recomputing with identical inputs is bit-identical.
    #[test]
    fn prop_recompute_is_deterministic(params in parameters(), items in indirect_items()) {
        prop_assert_eq!(compute(&params, &items), compute(&params, &items));
    }

    /// Property: appending a flat item adds exactly its value to the
    /// indirect total, whatever the sales value.
    #[test]
    fn prop_flat_amount_independent_of_vgv(
        params in parameters(),
        items in indirect_items(),
        flat_value in 0.0..2_000_000.0f64,
    ) {
        let base = compute(&params, &items);

        let mut with_flat = items.clone();
        with_flat.push(IndirectCostItem::flat("appended", flat_value));
        let result = compute(&params, &with_flat);

        prop_assert_eq!(
            result.indirect_cost_total,
            base.indirect_cost_total + flat_value
        );
    }
}
