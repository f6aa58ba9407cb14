//! `hardstock-ingest` — the snapshot boundary.
//!
//! The remote document store pushes full-replace snapshots of three record
//! sets. This crate holds the latest snapshot per set and fans change
//! notifications out to synchronous listeners; it performs no fetching,
//! decoding or derivation itself.

pub mod hub;

pub use hub::{RecordSet, SnapshotHub, SubscriptionHandle};
