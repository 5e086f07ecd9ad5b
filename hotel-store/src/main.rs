use hotel_store::{
    CustomerRepository, HotelRepository, JsonStore, Repository, ReservationRepository,
    setup_environment,
};
use shared::models::{CustomerCreate, HotelCreate};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();
    tracing::info!(data_dir = %config.store.data_dir.display(), "Hotel store starting...");

    // 2. 准备数据文件
    let store = JsonStore::new(config.store.clone());
    store.ensure_storage()?;

    let hotels = HotelRepository::new(store.clone());
    let customers = CustomerRepository::new(store.clone());
    let reservations = ReservationRepository::new(store);

    println!("=== Create Hotel ===");
    let mut hotel = hotels.create(HotelCreate {
        name: "Hotel Central".to_string(),
        location: "City X".to_string(),
        total_rooms: 20,
    })?;
    println!("{hotel}");

    println!("\n=== Create Customer ===");
    let customer = customers.create(CustomerCreate {
        name: "Ana Perez".to_string(),
        email: "ana@example.com".to_string(),
        phone: "555-1234".to_string(),
    })?;
    println!("{customer}");

    println!("\n=== Create Reservation ===");
    match reservations.create(&customer, &mut hotel) {
        Ok(reservation) => println!("{reservation}"),
        Err(e) => println!("Reservation failed: {e}"),
    }

    Ok(())
}
