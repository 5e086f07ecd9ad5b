//! Shared types for the hotel store
//!
//! Plain record types persisted by `hotel-store`, their create/update
//! payloads, and small id/time helpers.

pub mod models;
pub mod util;

// Re-exports
pub use models::{
    Customer, CustomerCreate, CustomerUpdate, Hotel, HotelCreate, HotelUpdate, Reservation,
};
pub use serde::{Deserialize, Serialize};
