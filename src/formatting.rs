//! Locale-neutral number formatting for reports.

/// Format a monetary or area value with two decimals and thousands
/// separators: `1234567.891` becomes `1,234,567.89`.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

pub fn format_currency(value: f64) -> String {
    format!("$ {}", format_amount(value))
}

pub fn format_area(value: f64) -> String {
    format!("{} m²", format_amount(value))
}

pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
