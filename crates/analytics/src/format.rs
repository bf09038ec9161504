//! Display formatting for KPI card values.

/// Format a rate as a percentage with one decimal place, e.g. `12.5%`.
///
/// Degenerate rates are defined as 0 elsewhere in the engine, so non-finite
/// input formats as `0.0%` instead of leaking `NaN%` into a card.
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "0.0%".to_string();
    }
    format!("{value:.1}%")
}

/// Format a count with en-US thousands grouping, e.g. `12,345`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
