use rust_decimal::Decimal;

use super::Category;

/// One recorded expense. `id` is `None` until the store has assigned a rowid;
/// once assigned it never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: Option<i64>,
    pub date: String,
    pub category: Category,
    pub amount: Decimal,
    pub description: String,
}

impl Expense {
    pub fn new(date: String, category: Category, amount: Decimal, description: String) -> Self {
        Self {
            id: None,
            date,
            category,
            amount,
            description,
        }
    }

    /// The id as the store displays it, or "-" for a not-yet-persisted row.
    pub fn id_text(&self) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => "-".into(),
        }
    }
}
