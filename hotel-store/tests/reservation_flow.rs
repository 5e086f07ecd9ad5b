use hotel_store::{
    Collection, CustomerRepository, HotelRepository, JsonStore, RepoError, Repository,
    ReservationRepository, StoreConfig,
};
use shared::models::{CustomerCreate, Hotel, HotelCreate, HotelUpdate, Reservation};
use tempfile::TempDir;

struct Desk {
    _dir: TempDir,
    store: JsonStore,
    hotels: HotelRepository,
    customers: CustomerRepository,
    reservations: ReservationRepository,
}

fn desk() -> Desk {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonStore::new(StoreConfig::new(dir.path().join("data")));
    store.ensure_storage().expect("Failed to init storage");
    Desk {
        _dir: dir,
        hotels: HotelRepository::new(store.clone()),
        customers: CustomerRepository::new(store.clone()),
        reservations: ReservationRepository::new(store.clone()),
        store,
    }
}

fn new_hotel(desk: &Desk, total_rooms: u32) -> Hotel {
    desk.hotels
        .create(HotelCreate {
            name: "Hotel Central".to_string(),
            location: "City X".to_string(),
            total_rooms,
        })
        .unwrap()
}

fn assert_room_invariant(desk: &Desk) {
    for hotel in desk.hotels.find_all().unwrap() {
        assert!(
            hotel.available_rooms <= hotel.total_rooms,
            "hotel {} has {} of {} rooms available",
            hotel.id,
            hotel.available_rooms,
            hotel.total_rooms
        );
    }
}

#[test]
fn test_end_to_end_reservation() {
    let desk = desk();
    let mut hotel = new_hotel(&desk, 1);
    let customer = desk
        .customers
        .create(CustomerCreate {
            name: "Ana Perez".to_string(),
            email: "ana@example.com".to_string(),
            phone: "555-1234".to_string(),
        })
        .unwrap();

    let reservation = desk.reservations.create(&customer, &mut hotel).unwrap();
    let stored = desk.hotels.find_by_id(&hotel.id).unwrap().unwrap();
    assert_eq!(stored.available_rooms, 0);

    assert!(desk.reservations.cancel(&reservation.id).unwrap());
    let stored = desk.hotels.find_by_id(&hotel.id).unwrap().unwrap();
    assert_eq!(stored.available_rooms, 1);

    let on_disk: Vec<Reservation> = desk.store.try_load().unwrap();
    assert!(on_disk.iter().all(|r| r.id != reservation.id));
}

#[test]
fn test_room_invariant_over_sequence() {
    let desk = desk();
    let customer = desk
        .customers
        .create(CustomerCreate {
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            phone: "000".to_string(),
        })
        .unwrap();
    let mut hotel = new_hotel(&desk, 3);

    let mut booked = Vec::new();
    for _ in 0..5 {
        match desk.reservations.create(&customer, &mut hotel) {
            Ok(r) => booked.push(r),
            Err(e) => assert!(matches!(e, RepoError::CapacityExhausted(_))),
        }
        assert_room_invariant(&desk);
    }
    assert_eq!(booked.len(), 3);

    desk.hotels
        .update(
            &hotel.id,
            HotelUpdate {
                total_rooms: Some(2),
                ..Default::default()
            },
        )
        .unwrap();
    assert_room_invariant(&desk);

    for r in &booked {
        assert!(desk.reservations.cancel(&r.id).unwrap());
        assert_room_invariant(&desk);
    }
    let stored = desk.hotels.find_by_id(&hotel.id).unwrap().unwrap();
    assert_eq!(stored.available_rooms, stored.total_rooms);
    assert!(desk.reservations.find_all().unwrap().is_empty());
}

#[test]
fn test_outdated_hotel_copy_cannot_overbook() {
    let desk = desk();
    let customer = desk
        .customers
        .create(CustomerCreate {
            name: "Late Guest".to_string(),
            email: "late@example.com".to_string(),
            phone: "111".to_string(),
        })
        .unwrap();
    let mut outdated = new_hotel(&desk, 5);

    desk.hotels
        .update(
            &outdated.id,
            HotelUpdate {
                total_rooms: Some(1),
                ..Default::default()
            },
        )
        .unwrap();

    let mut fresh = desk.hotels.find_by_id(&outdated.id).unwrap().unwrap();
    desk.reservations.create(&customer, &mut fresh).unwrap();

    let second = desk.reservations.create(&customer, &mut outdated);
    assert!(matches!(second, Err(RepoError::CapacityExhausted(_))));
    assert_room_invariant(&desk);

    let stored = desk.hotels.find_by_id(&outdated.id).unwrap().unwrap();
    assert_eq!(stored.total_rooms, 1);
    assert_eq!(stored.available_rooms, 0);
    assert_eq!(desk.reservations.find_all().unwrap().len(), 1);
}

#[test]
fn test_collections_are_json_arrays() {
    let desk = desk();
    new_hotel(&desk, 2);

    let raw = std::fs::read_to_string(desk.store.path(Collection::Hotels)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["total_rooms"], 2);
    assert_eq!(records[0]["available_rooms"], 2);

    let raw = std::fs::read_to_string(desk.store.path(Collection::Reservations)).unwrap();
    assert_eq!(raw.trim(), "[]");
}

#[test]
fn test_fresh_snapshot_per_call() {
    let desk = desk();
    let hotel = new_hotel(&desk, 4);

    // a second handle on the same directory sees writes immediately
    let other = HotelRepository::new(JsonStore::new(desk.store.config().clone()));
    other
        .update(
            &hotel.id,
            HotelUpdate {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let stored = desk.hotels.find_by_id(&hotel.id).unwrap().unwrap();
    assert_eq!(stored.name, "Renamed");
}
