//! `hardstock-dashboard` — composition of the derivation pipeline.
//!
//! Subscribes to the snapshot hub and recomputes the derived inventory
//! views and alerts wholesale on every upstream change. Presentation
//! components read the latest derived values; they never patch them.

pub mod view;

#[cfg(test)]
mod integration_tests;

pub use view::DashboardView;
