//! Data models
//!
//! Persisted by `hotel-store` as flat JSON records.
//! All IDs are UUID v4 strings generated at creation time.

pub mod customer;
pub mod hotel;
pub mod reservation;

// Re-exports
pub use customer::*;
pub use hotel::*;
pub use reservation::*;

/// Returns the new value when it carries content.
///
/// Update payloads treat `None` and the empty string alike: the stored
/// value is kept.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
