//! Utilidad de seeding para desarrollo: limpia y repuebla usuarios y coches.
//! Sale con código 0 en éxito y 1 ante cualquier fallo.

use anyhow::Result;
use log::{error, info};
use rust_decimal::Decimal;

use rencar_backend::config::database::DatabaseConfig;
use rencar_backend::models::user::Role;
use rencar_backend::repositories::car_repository::CarRepository;
use rencar_backend::repositories::user_repository::UserRepository;
use rencar_backend::MIGRATOR;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(err) = run().await {
        error!("❌ Seeding failed: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let pool = DatabaseConfig::default().create_pool().await?;
    MIGRATOR.run(&pool).await?;

    info!("🧹 Clearing existing data...");
    sqlx::query("DELETE FROM bookings").execute(&pool).await?;
    sqlx::query("DELETE FROM cars").execute(&pool).await?;
    sqlx::query("DELETE FROM users").execute(&pool).await?;
    sqlx::query("DELETE FROM contact_messages").execute(&pool).await?;

    info!("🔐 Hashing passwords...");
    let password_hash = bcrypt::hash("123456", bcrypt::DEFAULT_COST)?;

    info!("🌱 Inserting sample users...");
    let users = UserRepository::new(pool.clone());

    let _customer = users
        .create(
            "john_doe".to_string(),
            "john@example.com".to_string(),
            password_hash.clone(),
            "John Doe".to_string(),
            Some("9998887777".to_string()),
            Some("123 Main Street, New York".to_string()),
            Role::Customer,
        )
        .await?;

    let host1 = users
        .create(
            "carhost1".to_string(),
            "host1@example.com".to_string(),
            password_hash.clone(),
            "Alice Host".to_string(),
            Some("8887776666".to_string()),
            Some("Los Angeles, CA".to_string()),
            Role::Host,
        )
        .await?;

    let host2 = users
        .create(
            "carhost2".to_string(),
            "host2@example.com".to_string(),
            password_hash,
            "Bob Host".to_string(),
            Some("7776665555".to_string()),
            Some("Miami, FL".to_string()),
            Role::Host,
        )
        .await?;

    info!("🚘 Inserting sample cars...");
    let cars = CarRepository::new(pool.clone());

    cars.create(
        host1.id,
        "Toyota".to_string(),
        "Corolla".to_string(),
        2022,
        Some("White".to_string()),
        Some("TOY123".to_string()),
        Decimal::from(35),
        "economy".to_string(),
        5,
        "automatic".to_string(),
        "petrol".to_string(),
        "New York".to_string(),
        Some("Fuel-efficient and reliable compact car.".to_string()),
        Some("uploads/sample1.png".to_string()),
    )
    .await?;

    cars.create(
        host1.id,
        "Honda".to_string(),
        "Civic".to_string(),
        2023,
        Some("Silver".to_string()),
        Some("HON456".to_string()),
        Decimal::from(38),
        "economy".to_string(),
        5,
        "automatic".to_string(),
        "petrol".to_string(),
        "Los Angeles".to_string(),
        Some("Sleek design with excellent fuel economy.".to_string()),
        Some("uploads/sample2.png".to_string()),
    )
    .await?;

    cars.create(
        host2.id,
        "BMW".to_string(),
        "3 Series".to_string(),
        2023,
        Some("Black".to_string()),
        Some("BMW789".to_string()),
        Decimal::from(90),
        "luxury".to_string(),
        5,
        "automatic".to_string(),
        "petrol".to_string(),
        "Miami".to_string(),
        Some("Luxury sedan with sporty performance.".to_string()),
        Some("uploads/sample3.png".to_string()),
    )
    .await?;

    info!("✅ Seeding completed successfully!");
    Ok(())
}
