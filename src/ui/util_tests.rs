#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_currency ───────────────────────────────────────────

#[test]
fn test_format_currency_two_decimals() {
    assert_eq!(format_currency(dec!(12.50)), "$12.50");
    assert_eq!(format_currency(dec!(12.5)), "$12.50");
}

#[test]
fn test_format_currency_zero() {
    assert_eq!(format_currency(dec!(0)), "$0.00");
}

#[test]
fn test_format_currency_whole_number() {
    assert_eq!(format_currency(dec!(80)), "$80.00");
}

#[test]
fn test_format_currency_no_grouping() {
    assert_eq!(format_currency(dec!(1234567.89)), "$1234567.89");
    assert_eq!(format_currency(dec!(1000000)), "$1000000.00");
}

#[test]
fn test_format_currency_rounds_nothing_away() {
    assert_eq!(format_currency(dec!(0.01)), "$0.01");
    assert_eq!(format_currency(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_currency_negative() {
    assert_eq!(format_currency(dec!(-4.20)), "-$4.20");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_shorter_than_max() {
    assert_eq!(truncate("Rent", 10), "Rent");
}

#[test]
fn test_truncate_at_exact_width() {
    assert_eq!(truncate("Lunch", 5), "Lunch");
}

#[test]
fn test_truncate_cuts_with_ellipsis() {
    assert_eq!(truncate("Quarterly insurance premium", 10), "Quarterly…");
}

#[test]
fn test_truncate_empty_input() {
    assert_eq!(truncate("", 8), "");
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate("Groceries", 0), "");
}

#[test]
fn test_truncate_counts_chars_not_bytes() {
    assert_eq!(truncate("Crème brûlée dessert", 12), "Crème brûlé…");
}

#[test]
fn test_truncate_width_one() {
    assert_eq!(truncate("Bus", 1), "…");
}
