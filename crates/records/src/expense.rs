use chrono::Utc;
use serde::{Deserialize, Serialize};

use hardstock_core::{DomainError, DomainResult, RecordId};

/// The fixed expense classes tracked by the expense summary.
pub const EXPENSE_CATEGORIES: [&str; 6] =
    ["Salaries", "Office", "Rent", "Insurance", "Licenses", "Permits"];

/// Expense document as held in the `expenses` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: RecordId,
    pub category: String,
    pub amount: f64,
    pub date: Option<String>,
}

/// User-entered form data for a new expense, unvalidated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseDraft {
    pub category: String,
    pub amount: f64,
}

impl ExpenseDraft {
    pub fn validate(self) -> DomainResult<ExpenseRecord> {
        if !EXPENSE_CATEGORIES.contains(&self.category.as_str()) {
            return Err(DomainError::validation("expense category is not tracked"));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(DomainError::validation(
                "amount must be a non-negative number",
            ));
        }

        Ok(ExpenseRecord {
            id: RecordId::generate(),
            category: self.category,
            amount: self.amount,
            date: Some(Utc::now().to_rfc3339()),
        })
    }
}
