use anyhow::Result;

use crate::db::Database;
use crate::models::*;
use crate::ui::form::ExpenseForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Entry,
    Search,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Entry => write!(f, "ENTRY"),
            Self::Search => write!(f, "SEARCH"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending delete awaiting user confirmation.
#[derive(Debug, Clone)]
pub(crate) struct PendingDelete {
    pub(crate) id: i64,
    pub(crate) description: String,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) mode: InputMode,
    pub(crate) command_line: String,
    pub(crate) search_query: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Expense list
    pub(crate) expenses: Vec<Expense>,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    pub(crate) expense_count: i64,
    pub(crate) total: rust_decimal::Decimal,

    // Entry form
    pub(crate) form: ExpenseForm,

    // Confirmation
    pub(crate) pending_delete: Option<PendingDelete>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            mode: InputMode::Normal,
            command_line: String::new(),
            search_query: String::new(),
            status_message: String::new(),
            show_help: false,

            expenses: Vec::new(),
            expense_index: 0,
            expense_scroll: 0,
            expense_count: 0,
            total: rust_decimal::Decimal::ZERO,

            form: ExpenseForm::new(),

            pending_delete: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Full reload of the table. The running total and row count change
    /// only here, never on a filtered read.
    pub(crate) fn refresh_expenses(&mut self, db: &Database) -> Result<()> {
        self.expenses = db.all_expenses()?;
        self.total = self.expenses.iter().map(|e| e.amount).sum();
        self.expense_count = db.expense_count()?;
        self.clamp_cursor();
        Ok(())
    }

    /// Replace the visible rows with the current search results. Leaves the
    /// total and count at their full-table values.
    pub(crate) fn refresh_search(&mut self, db: &Database) -> Result<()> {
        self.expenses = db.search_expenses(&self.search_query)?;
        self.clamp_cursor();
        Ok(())
    }

    fn clamp_cursor(&mut self) {
        if self.expense_index >= self.expenses.len() && !self.expenses.is_empty() {
            self.expense_index = self.expenses.len() - 1;
        }
        if self.expenses.is_empty() {
            self.expense_index = 0;
            self.expense_scroll = 0;
        } else if self.expense_index < self.expense_scroll {
            self.expense_scroll = self.expense_index;
        }
    }

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.expense_index)
    }

    pub(crate) fn move_down(&mut self) {
        if self.expense_index + 1 < self.expenses.len() {
            self.expense_index += 1;
            if self.expense_index >= self.expense_scroll + self.visible_rows {
                self.expense_scroll = self.expense_index.saturating_sub(self.visible_rows - 1);
            }
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.expense_index = self.expense_index.saturating_sub(1);
        if self.expense_index < self.expense_scroll {
            self.expense_scroll = self.expense_index;
        }
    }

    pub(crate) fn jump_top(&mut self) {
        self.expense_index = 0;
        self.expense_scroll = 0;
    }

    pub(crate) fn jump_bottom(&mut self) {
        if !self.expenses.is_empty() {
            self.expense_index = self.expenses.len() - 1;
            self.expense_scroll = self
                .expense_index
                .saturating_sub(self.visible_rows.saturating_sub(1));
        }
    }

    pub(crate) fn half_page_down(&mut self) {
        if self.expenses.is_empty() {
            return;
        }
        let step = (self.visible_rows / 2).max(1);
        self.expense_index = (self.expense_index + step).min(self.expenses.len() - 1);
        if self.expense_index >= self.expense_scroll + self.visible_rows {
            self.expense_scroll = self.expense_index.saturating_sub(self.visible_rows - 1);
        }
    }

    pub(crate) fn half_page_up(&mut self) {
        let step = (self.visible_rows / 2).max(1);
        self.expense_index = self.expense_index.saturating_sub(step);
        if self.expense_index < self.expense_scroll {
            self.expense_scroll = self.expense_index;
        }
    }

    /// Arm a delete of the selected row; the key handler finishes or cancels it.
    pub(crate) fn request_delete(&mut self) {
        let pending = self.selected_expense().and_then(|e| {
            e.id.map(|id| PendingDelete {
                id,
                description: e.description.clone(),
            })
        });
        match pending {
            Some(p) => {
                self.confirm_message = format!("Delete '{}' (#{})?", p.description, p.id);
                self.pending_delete = Some(p);
                self.mode = InputMode::Confirm;
            }
            None => self.set_status("No expense selected"),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
