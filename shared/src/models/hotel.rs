//! Hotel Model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::non_empty;

/// Hotel entity
///
/// `available_rooms` counts rooms not attached to an active reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub total_rooms: u32,
    pub available_rooms: u32,
}

/// Create hotel payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelCreate {
    pub name: String,
    pub location: String,
    pub total_rooms: u32,
}

/// Update hotel payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub total_rooms: Option<u32>,
}

impl Hotel {
    /// Build a fresh hotel with every room available.
    pub fn new(id: String, data: HotelCreate) -> Self {
        Self {
            id,
            name: data.name,
            location: data.location,
            total_rooms: data.total_rooms,
            available_rooms: data.total_rooms,
        }
    }

    /// Merge an update into this hotel.
    ///
    /// A change to `total_rooms` shifts `available_rooms` by the same delta,
    /// floored at zero. The ceiling is not re-clamped.
    pub fn apply_update(&mut self, data: HotelUpdate) {
        if let Some(name) = non_empty(data.name) {
            self.name = name;
        }
        if let Some(location) = non_empty(data.location) {
            self.location = location;
        }
        if let Some(total_rooms) = data.total_rooms {
            if total_rooms >= self.total_rooms {
                self.available_rooms += total_rooms - self.total_rooms;
            } else {
                self.available_rooms = self
                    .available_rooms
                    .saturating_sub(self.total_rooms - total_rooms);
            }
            self.total_rooms = total_rooms;
        }
    }

    pub fn has_vacancy(&self) -> bool {
        self.available_rooms > 0
    }

    pub fn all_rooms_available(&self) -> bool {
        self.available_rooms >= self.total_rooms
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hotel ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Total Rooms: {}", self.total_rooms)?;
        write!(f, "Available Rooms: {}", self.available_rooms)
    }
}
