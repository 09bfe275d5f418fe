use chrono::{Local, NaiveDate};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::models::{Category, Expense};

/// Digits with one optional dot and at most two fraction digits. The numeric
/// upper bound is checked separately so the pattern stays readable.
#[allow(clippy::unwrap_used)]
static AMOUNT_MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{0,2})?$").unwrap());

fn max_amount() -> Decimal {
    Decimal::from(1_000_000)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Date,
    Category,
    Amount,
    Description,
}

impl Field {
    pub(crate) fn all() -> &'static [Field] {
        &[
            Self::Date,
            Self::Category,
            Self::Amount,
            Self::Description,
        ]
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Description,
            Self::Description => Self::Date,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
            Self::Description => Self::Amount,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Amount => "Amount",
            Self::Description => "Description",
        }
    }
}

/// The always-visible entry panel. Values stay exactly as typed until a
/// submit succeeds; a failed submit never clears anything.
pub(crate) struct ExpenseForm {
    pub(crate) date: String,
    pub(crate) category: Category,
    pub(crate) amount: String,
    pub(crate) description: String,
    pub(crate) focus: Field,
}

impl ExpenseForm {
    pub(crate) fn new() -> Self {
        Self {
            date: Local::now().format("%Y-%m-%d").to_string(),
            category: Category::default(),
            amount: String::new(),
            description: String::new(),
            focus: Field::Date,
        }
    }

    /// Post-submit state: today's date, first category, cleared text fields.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub(crate) fn cycle_category_forward(&mut self) {
        self.category = self.category.next();
    }

    pub(crate) fn cycle_category_back(&mut self) {
        self.category = self.category.prev();
    }

    /// Apply one typed character to the focused field, subject to its mask.
    /// Characters a mask rejects are dropped silently, like a GUI validator.
    pub(crate) fn insert_char(&mut self, c: char) {
        match self.focus {
            Field::Date => {
                if (c.is_ascii_digit() || c == '-') && self.date.chars().count() < 10 {
                    self.date.push(c);
                }
            }
            Field::Category => {}
            Field::Amount => {
                let mut tentative = self.amount.clone();
                tentative.push(c);
                if AMOUNT_MASK.is_match(&tentative) && within_bound(&tentative) {
                    self.amount = tentative;
                }
            }
            Field::Description => self.description.push(c),
        }
    }

    pub(crate) fn delete_char(&mut self) {
        match self.focus {
            Field::Date => {
                self.date.pop();
            }
            Field::Category => {}
            Field::Amount => {
                self.amount.pop();
            }
            Field::Description => {
                self.description.pop();
            }
        }
    }

    pub(crate) fn value(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Category => self.category.as_str(),
            Field::Amount => &self.amount,
            Field::Description => &self.description,
        }
    }

    /// Build an expense from the current input, or say what is wrong.
    /// Check order: missing input first, then a bad amount, then a bad date.
    pub(crate) fn validate(&self) -> Result<Expense, &'static str> {
        if self.amount.is_empty() || self.description.is_empty() {
            return Err("Please fill all fields.");
        }
        let amount = parse_amount(&self.amount)?;
        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err("Date must be a valid YYYY-MM-DD date.");
        }
        Ok(Expense::new(
            self.date.clone(),
            self.category,
            amount,
            self.description.clone(),
        ))
    }
}

/// Parse user-entered amount text. Shared by the entry panel and the one-shot
/// add paths so every write path obeys the same bounds.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, &'static str> {
    // A trailing dot is an unfinished fraction, not an error
    let trimmed = raw.trim().trim_end_matches('.');
    let amount = match Decimal::from_str(trimmed) {
        Ok(a) => a,
        Err(_) => return Err("Amount must be a valid decimal number."),
    };
    if amount.is_sign_negative() || amount.scale() > 2 || amount > max_amount() {
        return Err("Amount must be 0 to 1000000 with at most two decimals.");
    }
    Ok(amount)
}

fn within_bound(tentative: &str) -> bool {
    let trimmed = tentative.trim_end_matches('.');
    Decimal::from_str(trimmed).is_ok_and(|a| a <= max_amount())
}
