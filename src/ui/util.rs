use rust_decimal::Decimal;

/// Format an amount as currency with exactly two decimal places.
/// e.g. `12.5` → `"$12.50"`. No digit grouping.
pub(crate) fn format_currency(val: Decimal) -> String {
    if val.is_sign_negative() {
        format!("-${:.2}", val.abs())
    } else {
        format!("${val:.2}")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is at most `max` characters, counting "…" as one. Safe for
/// multi-byte UTF-8.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}
