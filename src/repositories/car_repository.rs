use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::car::Car;
use crate::utils::errors::AppError;

/// Coche con el inquilino activo unido desde users
#[derive(Debug, FromRow)]
pub struct CarWithRenterRow {
    #[sqlx(flatten)]
    pub car: Car,
    pub renter_username: Option<String>,
    pub renter_email: Option<String>,
}

/// Coche con el host propietario unido desde users
#[derive(Debug, FromRow)]
pub struct CarWithHostRow {
    #[sqlx(flatten)]
    pub car: Car,
    pub host_username: Option<String>,
    pub host_email: Option<String>,
}

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        host_id: Uuid,
        brand: String,
        model: String,
        year: i32,
        color: Option<String>,
        license_plate: Option<String>,
        price_per_day: Decimal,
        category: String,
        seats: i32,
        transmission: String,
        fuel_type: String,
        location: String,
        description: Option<String>,
        image_path: Option<String>,
    ) -> Result<Car, AppError> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (id, host_id, brand, model, year, color, license_plate,
                              price_per_day, category, seats, transmission, fuel_type,
                              location, description, image_path, available, booked_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, TRUE, NULL, now())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(host_id)
        .bind(brand)
        .bind(model)
        .bind(year)
        .bind(color)
        .bind(license_plate)
        .bind(price_per_day)
        .bind(category)
        .bind(seats)
        .bind(transmission)
        .bind(fuel_type)
        .bind(location)
        .bind(description)
        .bind(image_path)
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    pub async fn list_available(&self) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE available = TRUE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn list_by_host(&self, host_id: Uuid) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE host_id = $1 ORDER BY created_at DESC",
        )
        .bind(host_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn list_by_host_with_renter(
        &self,
        host_id: Uuid,
    ) -> Result<Vec<CarWithRenterRow>, AppError> {
        let rows = sqlx::query_as::<_, CarWithRenterRow>(
            r#"
            SELECT c.*, u.username AS renter_username, u.email AS renter_email
            FROM cars c
            LEFT JOIN users u ON u.id = c.booked_by
            WHERE c.host_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(host_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_all_with_host(&self) -> Result<Vec<CarWithHostRow>, AppError> {
        let rows = sqlx::query_as::<_, CarWithHostRow>(
            r#"
            SELECT c.*, u.username AS host_username, u.email AS host_email
            FROM cars c
            LEFT JOIN users u ON u.id = c.host_id
            ORDER BY c.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Flip condicional de disponibilidad: compare-and-swap sobre el flag.
    ///
    /// De dos requests simultáneas por el mismo coche, exactamente una ve
    /// rows_affected == 1; la otra recibe false y debe devolver el conflicto.
    pub async fn reserve(&self, car_id: Uuid, renter_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE cars SET available = FALSE, booked_by = $2 WHERE id = $1 AND available = TRUE",
        )
        .bind(car_id)
        .bind(renter_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Volver a dejar el coche disponible. Si el coche ya no existe, la
    /// operación no afecta filas y se considera completada.
    pub async fn release(&self, car_id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE cars SET available = TRUE, booked_by = NULL WHERE id = $1")
            .bind(car_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
