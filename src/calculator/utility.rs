/// Formats a value with exactly two decimal places, e.g. `3.333` -> `"3.33"`.
///
/// A value exactly halfway between two hundredths rounds away from zero
/// (`2.625` -> `"2.63"`), the way a browser's `toFixed(2)` prints it.
pub fn fmt2(value: f64) -> String {
    // exact ties are the odd multiples of 1/8, and `value * 8.0` is exact
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (value * 100.0).round() / 100.0);
    }
    format!("{value:.2}")
}

/// Formats a number the way a plain JavaScript number prints:
/// no trailing `.0` for whole numbers (`3`, `2.5`).
pub fn fmt_number(value: f64) -> String {
    if value == 0.0 {
        // also folds -0.0
        return "0".to_string();
    }
    format!("{value}")
}

/// Cuts `s` to at most `max` characters, marking a cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
