pub mod area;
pub mod costs;
pub mod engine;
pub mod revenue;
pub mod types;

pub use area::{compute_areas, AreaBreakdown};
pub use costs::{
    compute_costs, indirect_cost_amount, indirect_cost_lines, CostBreakdown, IndirectCostLine,
};
pub use engine::compute;
pub use revenue::{adjusted_sale_price, compute_vgv};
pub use types::{
    FeasibilityResult, IndirectCostItem, IndirectCostKind, Outlook, ProjectParameters,
};
