//! `hardstock-summary` — date-range filtering and the purchase / sales /
//! expense summary aggregations behind the dashboard cards.

pub mod date_filter;
pub mod expenses;
pub mod purchases;
pub mod sales;

pub use date_filter::{Dated, filter_by_date, parse_day};
pub use expenses::{ExpenseBreakdown, ExpenseSummary, expenses_by_category};
pub use purchases::{purchase_total, purchase_total_in_range};
pub use sales::{CategorySales, sales_by_category};
