//! Reservation Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reservation entity
///
/// Existence means one room was taken from the referenced hotel.
/// Cancelling deletes the record; there is no status field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub customer_id: String,
    pub hotel_id: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservation ID: {}", self.id)?;
        writeln!(f, "Customer ID: {}", self.customer_id)?;
        writeln!(f, "Hotel ID: {}", self.hotel_id)?;
        write!(f, "Created At: {}", self.created_at)
    }
}
