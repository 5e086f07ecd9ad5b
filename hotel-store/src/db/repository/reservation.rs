//! Reservation Repository
//!
//! Owns the one cross-collection rule: a reservation record exists only
//! after a successful `reserve_room` on its hotel, and cancelling it hands
//! the room back.

use super::{HotelRepository, RepoError, RepoResult, Repository};
use crate::db::JsonStore;
use shared::models::{Customer, Hotel, Reservation};
use shared::util::{local_timestamp, new_id};

#[derive(Debug, Clone)]
pub struct ReservationRepository {
    store: JsonStore,
    hotels: HotelRepository,
}

impl ReservationRepository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            hotels: HotelRepository::new(store.clone()),
            store,
        }
    }

    pub fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        Ok(self.store.load())
    }

    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let reservation = self.store.find::<Reservation>(id);
        if reservation.is_none() {
            tracing::warn!(reservation_id = %id, "Reservation not found");
        }
        Ok(reservation)
    }

    /// Book one room at `hotel` for `customer`.
    ///
    /// Fails without side effects when either entity carries no id, or
    /// when the hotel has no room left.
    pub fn create(&self, customer: &Customer, hotel: &mut Hotel) -> RepoResult<Reservation> {
        if customer.id.trim().is_empty() || hotel.id.trim().is_empty() {
            tracing::warn!("Invalid customer or hotel");
            return Err(RepoError::InvalidArgument(
                "customer and hotel must be stored entities".into(),
            ));
        }

        if let Err(e) = self.hotels.reserve_room(hotel) {
            tracing::warn!(hotel_id = %hotel.id, "Room reservation failed");
            return Err(e);
        }

        let reservation = Reservation {
            id: new_id(),
            customer_id: customer.id.clone(),
            hotel_id: hotel.id.clone(),
            created_at: local_timestamp(),
        };
        self.store.insert(&reservation);
        tracing::info!(
            reservation_id = %reservation.id,
            customer_id = %reservation.customer_id,
            hotel_id = %reservation.hotel_id,
            "Reservation created"
        );
        Ok(reservation)
    }

    /// Cancel a reservation, returning its room to the hotel.
    ///
    /// Returns `Ok(false)` when no such reservation exists. If the hotel
    /// has since been deleted the room count is not restored, but the
    /// reservation is still removed.
    pub fn cancel(&self, id: &str) -> RepoResult<bool> {
        let reservations = self.store.load::<Reservation>();
        let Some(reservation) = reservations.iter().find(|r| r.id == id) else {
            tracing::warn!(reservation_id = %id, "Reservation not found");
            return Ok(false);
        };

        match self.hotels.find_by_id(&reservation.hotel_id)? {
            Some(mut hotel) => {
                // AlreadyFull is logged by cancel_room; the record goes either way
                let _ = self.hotels.cancel_room(&mut hotel);
            }
            None => {
                tracing::warn!(
                    reservation_id = %id,
                    hotel_id = %reservation.hotel_id,
                    "Hotel gone, room count not restored"
                );
            }
        }

        let remaining: Vec<Reservation> = reservations
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.store.save(&remaining);
        tracing::info!(reservation_id = %id, "Reservation cancelled");
        Ok(true)
    }
}
