/// Sale price after applying a scenario variation in percent.
pub fn adjusted_sale_price(base_price: f64, price_variation_pct: f64) -> f64 {
    base_price * (1.0 + price_variation_pct / 100.0)
}

/// Gross sales value: every sellable square meter at the average price.
pub fn compute_vgv(private_area: f64, sale_price_per_sqm: f64) -> f64 {
    sale_price_per_sqm * private_area
}
