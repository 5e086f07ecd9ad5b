//! Database Module
//!
//! Flat-file JSON storage: one pretty-printed array per collection,
//! re-read and rewritten in full on every operation.

pub mod repository;
pub mod store;

pub use store::{Collection, JsonStore, Record, StoreError, StoreResult};
