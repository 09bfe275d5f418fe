#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, InputMode};
use super::commands::handle_command;
use crate::db::Database;
use crate::models::{Category, Expense};

fn setup() -> (App, Database) {
    let db = Database::open_in_memory().unwrap();
    let rows = [
        ("2024-01-10", Category::Food, dec!(12.50), "Lunch at cafe"),
        ("2024-01-15", Category::Transportation, dec!(30.00), "Gas refill"),
        ("2024-02-01", Category::Bills, dec!(80.25), "Electricity bill"),
    ];
    for (date, category, amount, description) in rows {
        db.insert_expense(&Expense::new(
            date.into(),
            category,
            amount,
            description.into(),
        ))
        .unwrap();
    }
    let mut app = App::new();
    app.refresh_expenses(&db).unwrap();
    (app, db)
}

#[test]
fn test_quit_command() {
    let (mut app, mut db) = setup();
    handle_command("q", &mut app, &mut db).unwrap();
    assert!(!app.running);

    app.running = true;
    handle_command("quit", &mut app, &mut db).unwrap();
    assert!(!app.running);
}

#[test]
fn test_unknown_command_suggests_closest() {
    let (mut app, mut db) = setup();
    handle_command("serach coffee", &mut app, &mut db).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :serach. Did you mean :search?"
    );
}

#[test]
fn test_help_command_opens_overlay() {
    let (mut app, mut db) = setup();
    handle_command("help", &mut app, &mut db).unwrap();
    assert!(app.show_help);
}

#[test]
fn test_add_command_inserts_expense() {
    let (mut app, mut db) = setup();
    handle_command("add 2024-03-05 Shopping 45.99 New shoes", &mut app, &mut db).unwrap();

    let all = db.all_expenses().unwrap();
    assert_eq!(all.len(), 4);
    let added = &all[3];
    assert_eq!(added.date, "2024-03-05");
    assert_eq!(added.category, Category::Shopping);
    assert_eq!(added.amount, dec!(45.99));
    assert_eq!(added.description, "New shoes");

    assert_eq!(app.expense_count, 4);
    assert_eq!(app.total, dec!(168.74));
    assert!(app.status_message.starts_with("Added expense: New shoes"));
}

#[test]
fn test_add_command_keeps_description_spaces() {
    let (mut app, mut db) = setup();
    handle_command(
        "add 2024-03-05 Food 9.00 Coffee and a sandwich",
        &mut app,
        &mut db,
    )
    .unwrap();
    let all = db.all_expenses().unwrap();
    assert_eq!(all[3].description, "Coffee and a sandwich");
}

#[test]
fn test_add_command_rejects_bad_date() {
    let (mut app, mut db) = setup();
    handle_command("add 2024-13-05 Food 9.00 Nope", &mut app, &mut db).unwrap();
    assert!(app.status_message.starts_with("Invalid date: 2024-13-05"));
    assert_eq!(db.all_expenses().unwrap().len(), 3);
}

#[test]
fn test_add_command_rejects_unknown_category() {
    let (mut app, mut db) = setup();
    handle_command("add 2024-03-05 Gadgets 9.00 Nope", &mut app, &mut db).unwrap();
    assert!(app.status_message.starts_with("Unknown category: Gadgets"));
    assert!(app.status_message.contains("Food"));
    assert_eq!(db.all_expenses().unwrap().len(), 3);
}

#[test]
fn test_add_command_rejects_bad_amount() {
    let (mut app, mut db) = setup();
    handle_command("add 2024-03-05 Food abc Nope", &mut app, &mut db).unwrap();
    assert_eq!(app.status_message, "Amount must be a valid decimal number.");
    assert_eq!(db.all_expenses().unwrap().len(), 3);
}

#[test]
fn test_add_command_usage_on_short_input() {
    let (mut app, mut db) = setup();
    handle_command("add 2024-03-05 Food", &mut app, &mut db).unwrap();
    assert!(app.status_message.starts_with("Usage: :add"));
}

#[test]
fn test_delete_command_arms_confirmation() {
    let (mut app, mut db) = setup();
    app.expense_index = 0;
    handle_command("delete", &mut app, &mut db).unwrap();
    assert_eq!(app.mode, InputMode::Confirm);
    assert_eq!(app.confirm_message, "Delete 'Lunch at cafe' (#1)?");
    // Nothing deleted until confirmed
    assert_eq!(db.all_expenses().unwrap().len(), 3);
}

#[test]
fn test_search_command_filters_rows() {
    let (mut app, mut db) = setup();
    handle_command("search Gas", &mut app, &mut db).unwrap();
    assert_eq!(app.expenses.len(), 1);
    assert_eq!(app.expenses[0].description, "Gas refill");
    assert_eq!(app.search_query, "Gas");
    assert_eq!(app.total, dec!(122.75));
    assert_eq!(app.status_message, "Searching: Gas");
}

#[test]
fn test_search_command_without_args_clears() {
    let (mut app, mut db) = setup();
    handle_command("search Gas", &mut app, &mut db).unwrap();
    handle_command("s", &mut app, &mut db).unwrap();
    assert_eq!(app.expenses.len(), 3);
    assert!(app.search_query.is_empty());
    assert_eq!(app.status_message, "Search cleared");
}

#[test]
fn test_clear_command_restores_full_list() {
    let (mut app, mut db) = setup();
    handle_command("search bill", &mut app, &mut db).unwrap();
    assert_eq!(app.expenses.len(), 1);
    handle_command("clear", &mut app, &mut db).unwrap();
    assert_eq!(app.expenses.len(), 3);
    assert!(app.search_query.is_empty());
}

#[test]
fn test_export_command_writes_file() {
    let (mut app, mut db) = setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    handle_command(
        &format!("export {}", path.display()),
        &mut app,
        &mut db,
    )
    .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Id,Date,Category,Amount,Description"));
    assert_eq!(contents.lines().count(), 4);
    assert!(app.status_message.starts_with("Exported 3 expenses to "));
}

#[test]
fn test_export_command_empty_database() {
    let mut db = Database::open_in_memory().unwrap();
    let mut app = App::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    handle_command(
        &format!("export {}", path.display()),
        &mut app,
        &mut db,
    )
    .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(app.status_message.starts_with("Wrote empty export to "));
}
