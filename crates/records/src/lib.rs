//! `hardstock-records` — the four record types and their boundaries.
//!
//! Records are immutable snapshots delivered by the document store. The
//! decoders in [`decode`] are total: a malformed document yields a record
//! with defaulted fields, never an error, so one bad document can never
//! blank a derived view. The draft types are the opposite boundary: they
//! validate user-entered form data strictly before a record is created.

pub mod decode;
pub mod expense;
pub mod product;
pub mod purchase;
pub mod sale;

pub use decode::{decode_expense, decode_product, decode_purchase, decode_sale};
pub use expense::{EXPENSE_CATEGORIES, ExpenseDraft, ExpenseRecord};
pub use product::{NewProduct, ProductDraft, ProductRecord};
pub use purchase::{PurchaseDraft, PurchaseRecord};
pub use sale::SaleRecord;
