use anyhow::Result;

use crate::db::Database;
use crate::models::{Category, Expense};
use crate::ui::form::parse_amount;
use crate::ui::util::format_currency;

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], db),
        "list" | "ls" => cli_list(&args[2..], db),
        "total" => cli_total(db),
        "categories" => cli_categories(),
        "export" => cli_export(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("outlay {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Outlay - keyboard-driven expense recorder");
    println!();
    println!("Usage: outlay [command]");
    println!();
    println!("Commands:");
    println!("  (none)                       Open the interactive TUI");
    println!("  add <date> <category> <amount> <description>");
    println!("                               Record an expense (date is YYYY-MM-DD)");
    println!("  list [query]                 Print expenses, optionally filtered");
    println!("  total                        Print the grand total");
    println!("  categories                   List valid categories");
    println!("  export [path]                Write all expenses to CSV (default: expenses.csv)");
    println!("  -h, --help                   Show this help");
    println!("  -V, --version                Show version");
}

fn cli_add(args: &[String], db: &mut Database) -> Result<()> {
    if args.len() < 4 {
        anyhow::bail!("Usage: outlay add <date> <category> <amount> <description>");
    }

    let date = &args[0];
    if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        anyhow::bail!("Invalid date: {date}. Use YYYY-MM-DD");
    }

    let category = Category::parse_strict(&args[1]).ok_or_else(|| {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        anyhow::anyhow!(
            "Unknown category: {}. Available: {}",
            args[1],
            names.join(", ")
        )
    })?;

    let amount = parse_amount(&args[2]).map_err(anyhow::Error::msg)?;
    let description = args[3..].join(" ");

    let id = db.insert_expense(&Expense::new(
        date.clone(),
        category,
        amount,
        description.clone(),
    ))?;
    println!(
        "Added expense #{id}: {description} {}",
        format_currency(amount)
    );
    Ok(())
}

fn cli_list(args: &[String], db: &mut Database) -> Result<()> {
    let query = args.first().filter(|a| !a.starts_with('-')).cloned();
    let expenses = match &query {
        Some(q) => db.search_expenses(q)?,
        None => db.all_expenses()?,
    };

    if expenses.is_empty() {
        match &query {
            Some(q) => println!("No expenses matching '{q}'"),
            None => println!("No expenses"),
        }
        return Ok(());
    }

    println!(
        "{:<6} {:<12} {:<16} {:>12} Description",
        "Id", "Date", "Category", "Amount"
    );
    println!("{}", "─".repeat(70));
    for expense in &expenses {
        println!(
            "{:<6} {:<12} {:<16} {:>12} {}",
            expense.id_text(),
            expense.date,
            expense.category.as_str(),
            format_currency(expense.amount),
            expense.description,
        );
    }

    // A filtered listing is a view; the grand total belongs to the full table
    if query.is_none() {
        let total: rust_decimal::Decimal = expenses.iter().map(|e| e.amount).sum();
        println!("{}", "─".repeat(70));
        println!("{:<36} {:>12}", "Total Expenses", format_currency(total));
    }
    Ok(())
}

fn cli_total(db: &mut Database) -> Result<()> {
    let expenses = db.all_expenses()?;
    let total: rust_decimal::Decimal = expenses.iter().map(|e| e.amount).sum();
    println!("Total Expenses: {}", format_currency(total));
    Ok(())
}

fn cli_categories() -> Result<()> {
    for category in Category::all() {
        println!("{}", category.as_str());
    }
    Ok(())
}

fn cli_export(args: &[String], db: &mut Database) -> Result<()> {
    let path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| "expenses.csv".to_string());

    let count = db.export_to_csv(&path)?;
    if count == 0 {
        println!("Wrote empty export to {path}");
    } else {
        println!("Exported {count} expenses to {path}");
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
