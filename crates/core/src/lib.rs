//! `hardstock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no store access):
//! the fixed category catalog, the supplier lookup, stock thresholds, record
//! identifiers and the domain error model.

pub mod catalog;
pub mod error;
pub mod id;

pub use catalog::{Category, StockThresholds, supplier_category};
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
