/// Formats a numeric value the way hosts expect chart labels to read:
/// integral values print without a fractional part.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Y-axis tick label: rounded to two decimals, trailing zeros dropped.
#[must_use]
pub fn format_axis_tick(value: f64) -> String {
    format_number((value * 100.0).round() / 100.0)
}
