//! `hardstock-reconcile` — derivation of inventory views from record
//! snapshots.
//!
//! Both functions here are pure and total: they fold already-decoded
//! snapshots into fresh output structures, excluding records that reference
//! unknown suppliers or categories. Derived tables are disposable values,
//! rebuilt wholesale on every snapshot change and never patched in place.

pub mod inventory;
pub mod popular;

pub use inventory::{CategoryInventory, InventoryRow, reconcile_inventory};
pub use popular::{CategorySpend, CategoryStock, category_stock, purchase_spend_by_category};
