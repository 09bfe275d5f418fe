#![allow(clippy::unwrap_used)]

use chrono::Local;
use rust_decimal_macros::dec;

use super::form::*;
use crate::models::Category;

fn typed(form: &mut ExpenseForm, field: Field, text: &str) {
    form.focus = field;
    for c in text.chars() {
        form.insert_char(c);
    }
}

// ── Masks ─────────────────────────────────────────────────────

#[test]
fn test_new_form_defaults() {
    let form = ExpenseForm::new();
    assert_eq!(form.date, Local::now().format("%Y-%m-%d").to_string());
    assert_eq!(form.category, Category::Food);
    assert!(form.amount.is_empty());
    assert!(form.description.is_empty());
    assert_eq!(form.focus, Field::Date);
}

#[test]
fn test_amount_mask_accepts_two_decimals() {
    let mut form = ExpenseForm::new();
    typed(&mut form, Field::Amount, "12.34");
    assert_eq!(form.amount, "12.34");
}

#[test]
fn test_amount_mask_drops_third_decimal() {
    let mut form = ExpenseForm::new();
    typed(&mut form, Field::Amount, "12.345");
    assert_eq!(form.amount, "12.34");
}

#[test]
fn test_amount_mask_drops_letters() {
    let mut form = ExpenseForm::new();
    typed(&mut form, Field::Amount, "1a2b");
    assert_eq!(form.amount, "12");
}

#[test]
fn test_amount_mask_drops_second_dot() {
    let mut form = ExpenseForm::new();
    typed(&mut form, Field::Amount, "1.2.3");
    assert_eq!(form.amount, "1.23");
}

#[test]
fn test_amount_mask_rejects_leading_dot() {
    let mut form = ExpenseForm::new();
    typed(&mut form, Field::Amount, ".5");
    assert_eq!(form.amount, "5");
}

#[test]
fn test_amount_mask_blocks_over_bound() {
    let mut form = ExpenseForm::new();
    typed(&mut form, Field::Amount, "1000001");
    assert_eq!(form.amount, "100000");

    let mut form = ExpenseForm::new();
    typed(&mut form, Field::Amount, "1000000");
    assert_eq!(form.amount, "1000000");
}

#[test]
fn test_date_mask_digits_and_dashes_only() {
    let mut form = ExpenseForm::new();
    form.date.clear();
    typed(&mut form, Field::Date, "2024-x01y-05");
    assert_eq!(form.date, "2024-01-05");
}

#[test]
fn test_date_mask_caps_length() {
    let mut form = ExpenseForm::new();
    form.date.clear();
    typed(&mut form, Field::Date, "2024-01-0599");
    assert_eq!(form.date, "2024-01-05");
}

#[test]
fn test_category_field_ignores_typing() {
    let mut form = ExpenseForm::new();
    typed(&mut form, Field::Category, "abc");
    assert_eq!(form.category, Category::Food);
    form.delete_char();
    assert_eq!(form.category, Category::Food);
}

#[test]
fn test_category_cycling() {
    let mut form = ExpenseForm::new();
    form.cycle_category_forward();
    assert_eq!(form.category, Category::Entertainment);
    form.cycle_category_back();
    form.cycle_category_back();
    assert_eq!(form.category, Category::Others);
}

#[test]
fn test_delete_char_pops_focused_field() {
    let mut form = ExpenseForm::new();
    typed(&mut form, Field::Amount, "12.5");
    form.delete_char();
    assert_eq!(form.amount, "12.");
    typed(&mut form, Field::Description, "tea");
    form.delete_char();
    assert_eq!(form.description, "te");
}

#[test]
fn test_focus_order_wraps() {
    let mut form = ExpenseForm::new();
    form.focus_next();
    assert_eq!(form.focus, Field::Category);
    form.focus_next();
    form.focus_next();
    form.focus_next();
    assert_eq!(form.focus, Field::Date);
    form.focus_prev();
    assert_eq!(form.focus, Field::Description);
}

// ── Validation ────────────────────────────────────────────────

#[test]
fn test_validate_empty_fields_first() {
    let form = ExpenseForm::new();
    assert_eq!(form.validate(), Err("Please fill all fields."));

    // Empty-check wins even when the date is also broken
    let mut form = ExpenseForm::new();
    form.date = "not-a-date".into();
    assert_eq!(form.validate(), Err("Please fill all fields."));
}

#[test]
fn test_validate_bad_amount_before_bad_date() {
    let mut form = ExpenseForm::new();
    form.date = "not-a-date".into();
    form.amount = "abc".into();
    form.description = "x".into();
    assert_eq!(
        form.validate(),
        Err("Amount must be a valid decimal number.")
    );
}

#[test]
fn test_validate_bad_date() {
    let mut form = ExpenseForm::new();
    form.date = "2024-13-40".into();
    form.amount = "5".into();
    form.description = "x".into();
    assert_eq!(form.validate(), Err("Date must be a valid YYYY-MM-DD date."));
}

#[test]
fn test_validate_success_builds_expense() {
    let mut form = ExpenseForm::new();
    form.date = "2024-03-01".into();
    form.category = Category::Bills;
    form.amount = "42.50".into();
    form.description = "Water bill".into();
    let expense = form.validate().unwrap();
    assert_eq!(expense.id, None);
    assert_eq!(expense.date, "2024-03-01");
    assert_eq!(expense.category, Category::Bills);
    assert_eq!(expense.amount, dec!(42.50));
    assert_eq!(expense.description, "Water bill");
}

#[test]
fn test_validate_trailing_dot_amount() {
    let mut form = ExpenseForm::new();
    form.amount = "12.".into();
    form.description = "x".into();
    let expense = form.validate().unwrap();
    assert_eq!(expense.amount, dec!(12));
}

#[test]
fn test_reset_restores_defaults() {
    let mut form = ExpenseForm::new();
    typed(&mut form, Field::Amount, "9.99");
    typed(&mut form, Field::Description, "snack");
    form.cycle_category_forward();
    form.reset();
    assert_eq!(form.date, Local::now().format("%Y-%m-%d").to_string());
    assert_eq!(form.category, Category::Food);
    assert!(form.amount.is_empty());
    assert!(form.description.is_empty());
    assert_eq!(form.focus, Field::Date);
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_valid() {
    assert_eq!(parse_amount("12.50"), Ok(dec!(12.50)));
    assert_eq!(parse_amount(" 7 "), Ok(dec!(7)));
    assert_eq!(parse_amount("0"), Ok(dec!(0)));
    assert_eq!(parse_amount("1000000"), Ok(dec!(1000000)));
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert_eq!(
        parse_amount("abc"),
        Err("Amount must be a valid decimal number.")
    );
    assert_eq!(
        parse_amount(""),
        Err("Amount must be a valid decimal number.")
    );
}

#[test]
fn test_parse_amount_rejects_out_of_bounds() {
    assert_eq!(
        parse_amount("-5"),
        Err("Amount must be 0 to 1000000 with at most two decimals.")
    );
    assert_eq!(
        parse_amount("3.123"),
        Err("Amount must be 0 to 1000000 with at most two decimals.")
    );
    assert_eq!(
        parse_amount("1000000.01"),
        Err("Amount must be 0 to 1000000 with at most two decimals.")
    );
}
