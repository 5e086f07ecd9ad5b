//! Hotel Repository

use super::{BaseRepository, RepoError, RepoResult, Repository};
use crate::db::JsonStore;
use shared::models::{Hotel, HotelCreate, HotelUpdate};
use shared::util::new_id;

#[derive(Debug, Clone)]
pub struct HotelRepository {
    base: BaseRepository,
}

impl HotelRepository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Take one room from the stored hotel and refresh `hotel` with the result.
    ///
    /// The vacancy check runs against the stored record, so an out-of-date
    /// `hotel` cannot overbook. This is the only check against overbooking.
    pub fn reserve_room(&self, hotel: &mut Hotel) -> RepoResult<()> {
        self.adjust_availability(hotel, |h| {
            if !h.has_vacancy() {
                tracing::warn!(hotel_id = %h.id, "No rooms available");
                return Err(RepoError::CapacityExhausted(h.id.clone()));
            }
            h.available_rooms -= 1;
            Ok(())
        })
    }

    /// Give one room back to the stored hotel and refresh `hotel` with the result.
    pub fn cancel_room(&self, hotel: &mut Hotel) -> RepoResult<()> {
        self.adjust_availability(hotel, |h| {
            if h.all_rooms_available() {
                tracing::warn!(hotel_id = %h.id, "All rooms already available");
                return Err(RepoError::AlreadyFull(h.id.clone()));
            }
            h.available_rooms += 1;
            Ok(())
        })
    }

    /// Run `change` on the stored record and copy it back into `hotel`.
    ///
    /// When the hotel is no longer stored, `change` runs on the caller's copy
    /// and nothing is written.
    fn adjust_availability(
        &self,
        hotel: &mut Hotel,
        change: impl Fn(&mut Hotel) -> RepoResult<()>,
    ) -> RepoResult<()> {
        let id = hotel.id.clone();
        let mut current = None;
        let outcome = self.base.store().try_modify(&id, |stored: &mut Hotel| {
            let result = change(stored);
            current = Some(stored.clone());
            result
        });

        match outcome {
            Some(result) => {
                if let Some(stored) = current {
                    *hotel = stored;
                }
                result.map(|_| ())
            }
            None => {
                tracing::warn!(hotel_id = %id, "Hotel missing from storage, availability not saved");
                change(hotel)
            }
        }
    }
}

impl Repository<Hotel, HotelCreate, HotelUpdate> for HotelRepository {
    fn find_all(&self) -> RepoResult<Vec<Hotel>> {
        Ok(self.base.store().load())
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Hotel>> {
        let hotel = self.base.store().find::<Hotel>(id);
        if hotel.is_none() {
            tracing::warn!(hotel_id = %id, "Hotel not found");
        }
        Ok(hotel)
    }

    fn create(&self, data: HotelCreate) -> RepoResult<Hotel> {
        let hotel = Hotel::new(new_id(), data);
        self.base.store().insert(&hotel);
        tracing::info!(hotel_id = %hotel.id, name = %hotel.name, "Hotel created");
        Ok(hotel)
    }

    fn update(&self, id: &str, data: HotelUpdate) -> RepoResult<Hotel> {
        self.base
            .store()
            .modify::<Hotel>(id, |h| h.apply_update(data))
            .ok_or_else(|| {
                tracing::warn!(hotel_id = %id, "Hotel not found");
                RepoError::NotFound(format!("Hotel {id} not found"))
            })
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        if !self.base.store().remove::<Hotel>(id) {
            tracing::warn!(hotel_id = %id, "Hotel not found");
            return Ok(false);
        }
        tracing::info!(hotel_id = %id, "Hotel deleted");
        Ok(true)
    }
}
