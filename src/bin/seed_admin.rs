//! Bootstrap de la cuenta admin. Idempotente: si el admin ya existe no hace
//! nada. Sale con código 0 en éxito y 1 ante cualquier fallo.

use anyhow::Result;
use log::{error, info};

use rencar_backend::config::database::DatabaseConfig;
use rencar_backend::models::user::Role;
use rencar_backend::repositories::user_repository::UserRepository;
use rencar_backend::MIGRATOR;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(err) = run().await {
        error!("❌ Admin bootstrap failed: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@rencar.local".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "Admin@123".to_string());

    let pool = DatabaseConfig::default().create_pool().await?;
    MIGRATOR.run(&pool).await?;

    let users = UserRepository::new(pool);

    if users.find_by_email(&email).await?.is_some() {
        info!("Admin already exists");
        return Ok(());
    }

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;

    let admin = users
        .create(
            "admin".to_string(),
            email,
            password_hash,
            "Site Admin".to_string(),
            None,
            None,
            Role::Admin,
        )
        .await?;

    info!("Admin created: {}", admin.email);
    Ok(())
}
