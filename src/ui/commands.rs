use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;

use super::app::App;
use super::form::parse_amount;
use crate::db::Database;
use crate::models::{Category, Expense};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) exec: fn(&str, &mut App, &mut Database) -> anyhow::Result<()>,
}

macro_rules! command {
    ($registry:expr, $name:expr, $desc:expr, $func:expr) => {
        $registry.insert(
            $name,
            Command {
                description: $desc,
                exec: $func,
            },
        )
    };
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut map: HashMap<&str, Command> = HashMap::new();

    command!(map, "q", "Quit Outlay", cmd_quit);
    command!(map, "quit", "Quit Outlay", cmd_quit);
    command!(map, "help", "Show available commands", cmd_help);
    command!(map, "h", "Show available commands", cmd_help);
    command!(
        map,
        "add",
        "Add expense (e.g. :add 2024-01-15 Food 12.50 Lunch)",
        cmd_add
    );
    command!(
        map,
        "a",
        "Add expense (e.g. :a 2024-01-15 Food 12.50 Lunch)",
        cmd_add
    );
    command!(map, "delete", "Delete the selected expense", cmd_delete);
    command!(map, "d", "Delete the selected expense", cmd_delete);
    command!(
        map,
        "export",
        "Export expenses to CSV (e.g. :export ~/expenses.csv)",
        cmd_export
    );
    command!(map, "search", "Search expenses (e.g. :search coffee)", cmd_search);
    command!(map, "s", "Search expenses (e.g. :s coffee)", cmd_search);
    command!(map, "clear", "Clear the active search", cmd_clear);

    map
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let line = input.trim();
    let (name, args) = match line.split_once(' ') {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match COMMANDS.get(name) {
        Some(cmd) => (cmd.exec)(args, app, db),
        None => {
            let suggestion = find_closest(name);
            app.set_status(format!(
                "Unknown command: :{name}. Did you mean :{suggestion}?"
            ));
            Ok(())
        }
    }
}

fn find_closest(input: &str) -> &'static str {
    COMMANDS
        .keys()
        .filter(|name| name.len() > 1) // one-letter aliases make poor suggestions
        .min_by_key(|name| levenshtein(input, name))
        .copied()
        .unwrap_or("help")
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut above: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let subst = above[j] + usize::from(ca != cb);
            row[j + 1] = subst.min(above[j + 1] + 1).min(row[j] + 1);
        }
        std::mem::swap(&mut above, &mut row);
    }

    above[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(
            "Usage: :add <date> <category> <amount> <description>. Example: :add 2024-01-15 Food 12.50 Lunch",
        );
        return Ok(());
    }

    let parts: Vec<&str> = args.splitn(4, ' ').collect();
    if parts.len() < 4 {
        app.set_status("Usage: :add <date> <category> <amount> <description>");
        return Ok(());
    }

    let date = parts[0];
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        app.set_status(format!("Invalid date: {date}. Use YYYY-MM-DD"));
        return Ok(());
    }

    let category = match Category::parse_strict(parts[1]) {
        Some(c) => c,
        None => {
            let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
            app.set_status(format!(
                "Unknown category: {}. Available: {}",
                parts[1],
                names.join(", ")
            ));
            return Ok(());
        }
    };

    let amount = match parse_amount(parts[2]) {
        Ok(a) => a,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };

    let description = parts[3].trim();
    db.insert_expense(&Expense::new(
        date.to_string(),
        category,
        amount,
        description.to_string(),
    ))?;
    app.refresh_expenses(db)?;
    app.set_status(format!("Added expense: {description} ${amount}"));
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.request_delete();
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        "expenses.csv".to_string()
    } else {
        crate::run::shellexpand(args)
    };

    let count = db.export_to_csv(&path)?;
    if count == 0 {
        app.set_status(format!("Wrote empty export to {path}"));
    } else {
        app.set_status(format!("Exported {count} expenses to {path}"));
    }
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.search_query = args.to_string();
    app.jump_top();

    if args.is_empty() {
        app.refresh_expenses(db)?;
        app.set_status("Search cleared");
    } else {
        app.refresh_search(db)?;
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.search_query.clear();
    app.jump_top();
    app.refresh_expenses(db)?;
    app.set_status("Search cleared");
    Ok(())
}
