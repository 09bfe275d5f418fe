mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::path::Path;

use crate::models::*;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Could not open database at {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Setting database pragmas failed")?;
        Self::from_connection(conn)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let mut db = Database { conn };
        db.migrate().context("Schema migration failed")?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let versioned: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !versioned {
            // Fresh database, apply the full schema in one shot
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from, sql) in schema::MIGRATIONS {
            if current <= from {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Expenses ──────────────────────────────────────────────

    pub(crate) fn insert_expense(&self, expense: &Expense) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO expenses (date, category, amount, description)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                expense.date,
                expense.category.as_str(),
                expense.amount.to_f64().unwrap_or_default(),
                expense.description,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Deleting an id that is not present is not an error.
    pub(crate) fn delete_expense(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn read_expense(row: &rusqlite::Row<'_>) -> rusqlite::Result<Expense> {
        Ok(Expense {
            id: Some(row.get(0)?),
            date: row.get(1)?,
            category: Category::parse(&row.get::<_, String>(2)?),
            amount: Decimal::from_f64(row.get(3)?).unwrap_or_default(),
            description: row.get(4)?,
        })
    }

    /// Every expense, in rowid order.
    pub(crate) fn all_expenses(&self) -> Result<Vec<Expense>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, date, category, amount, description FROM expenses")?;
        let fetched = stmt.query_map([], Self::read_expense)?;
        Ok(fetched.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Substring match against description, category, or the numeric id.
    /// The needle is passed as a bound parameter; `%` and `_` inside it
    /// keep their SQL meaning.
    pub(crate) fn search_expenses(&self, query: &str) -> Result<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, category, amount, description FROM expenses
             WHERE description LIKE ?1 OR category LIKE ?1 OR CAST(id AS TEXT) LIKE ?1",
        )?;
        let fetched = stmt.query_map(params![format!("%{query}%")], Self::read_expense)?;
        Ok(fetched.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub(crate) fn expense_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?)
    }

    /// Writes every expense to `path`, replacing the file if it exists.
    /// Returns the number of rows written.
    pub(crate) fn export_to_csv(&self, path: &str) -> Result<usize> {
        let expenses = self.all_expenses()?;
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Could not create export file {path}"))?;
        writer.write_record(["Id", "Date", "Category", "Amount", "Description"])?;
        for expense in &expenses {
            writer.write_record([
                expense.id.unwrap_or(0).to_string(),
                expense.date.clone(),
                expense.category.as_str().to_string(),
                expense.amount.to_string(),
                expense.description.clone(),
            ])?;
        }
        writer
            .flush()
            .with_context(|| format!("Could not finish writing {path}"))?;
        Ok(expenses.len())
    }
}
