//! Expense summary card: totals and shares over the fixed expense classes.

use serde::{Deserialize, Serialize};

use hardstock_records::{EXPENSE_CATEGORIES, ExpenseRecord};

/// Total and percentage share for one expense class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBreakdown {
    pub category: String,
    pub total: f64,
    pub percent: f64,
}

/// Expense summary: the headline total plus one breakdown row per tracked
/// class (zero rows kept so the chart shape is stable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    /// Sum over every expense record, tracked class or not.
    pub total: f64,
    pub by_category: Vec<ExpenseBreakdown>,
}

pub fn expenses_by_category(expenses: &[ExpenseRecord]) -> ExpenseSummary {
    let totals: Vec<f64> = EXPENSE_CATEGORIES
        .iter()
        .map(|&category| {
            expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .sum()
        })
        .collect();

    let tracked: f64 = totals.iter().sum();

    ExpenseSummary {
        total: expenses.iter().map(|e| e.amount).sum(),
        by_category: EXPENSE_CATEGORIES
            .iter()
            .zip(totals)
            .map(|(&category, total)| ExpenseBreakdown {
                category: category.to_string(),
                total,
                percent: if tracked > 0.0 { total / tracked * 100.0 } else { 0.0 },
            })
            .collect(),
    }
}
