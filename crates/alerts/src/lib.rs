//! `hardstock-alerts` — stock alert evaluation.

pub mod evaluate;

pub use evaluate::{Alert, AlertKind, alert_count, evaluate};
