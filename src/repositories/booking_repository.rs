use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::booking_dto::BookingView;
use crate::models::booking::Booking;
use crate::models::car::CarSummary;
use crate::models::user::UserSummary;
use crate::utils::errors::AppError;

/// Reserva con coche, inquilino y host unidos. Las columnas unidas son
/// opcionales porque los borrados administrativos no cascadean.
#[derive(Debug, FromRow)]
pub struct BookingViewRow {
    #[sqlx(flatten)]
    pub booking: Booking,
    pub car_brand: Option<String>,
    pub car_model: Option<String>,
    pub car_price_per_day: Option<Decimal>,
    pub car_image_path: Option<String>,
    pub car_location: Option<String>,
    pub customer_username: Option<String>,
    pub customer_email: Option<String>,
    pub host_username: Option<String>,
    pub host_email: Option<String>,
}

impl BookingViewRow {
    pub fn into_view(self) -> BookingView {
        let booking = self.booking;

        let car = self.car_brand.map(|brand| CarSummary {
            id: booking.car_id,
            brand,
            model: self.car_model.unwrap_or_default(),
            price_per_day: self
                .car_price_per_day
                .and_then(|price| price.to_f64())
                .unwrap_or(0.0),
            image_path: self.car_image_path,
            location: self.car_location,
        });

        let customer = self.customer_username.map(|username| UserSummary {
            id: booking.customer_id,
            username,
            email: self.customer_email.unwrap_or_default(),
        });

        let host = self.host_username.map(|username| UserSummary {
            id: booking.host_id,
            username,
            email: self.host_email.unwrap_or_default(),
        });

        BookingView {
            id: booking.id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            total_price: booking.total_price.to_f64().unwrap_or(0.0),
            status: booking.status,
            created_at: booking.created_at,
            car,
            customer,
            host,
        }
    }
}

const BOOKING_VIEW_SELECT: &str = r#"
    SELECT b.*,
           c.brand AS car_brand,
           c.model AS car_model,
           c.price_per_day AS car_price_per_day,
           c.image_path AS car_image_path,
           c.location AS car_location,
           cu.username AS customer_username,
           cu.email AS customer_email,
           h.username AS host_username,
           h.email AS host_email
    FROM bookings b
    LEFT JOIN cars c ON c.id = b.car_id
    LEFT JOIN users cu ON cu.id = b.customer_id
    LEFT JOIN users h ON h.id = b.host_id
"#;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        car_id: Uuid,
        customer_id: Uuid,
        host_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_price: Decimal,
    ) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, car_id, customer_id, host_id, start_date, end_date,
                                  total_price, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'booked', now())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(car_id)
        .bind(customer_id)
        .bind(host_id)
        .bind(start_date)
        .bind(end_date)
        .bind(total_price)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    pub async fn cancel(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE bookings SET status = 'cancelled' WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn open_booking_exists(&self, car_id: Uuid) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM bookings WHERE car_id = $1 AND status = 'booked')",
        )
        .bind(car_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    pub async fn views_for_customer(&self, customer_id: Uuid) -> Result<Vec<BookingView>, AppError> {
        let sql = format!("{BOOKING_VIEW_SELECT} WHERE b.customer_id = $1 ORDER BY b.created_at DESC");
        let rows = sqlx::query_as::<_, BookingViewRow>(&sql)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(BookingViewRow::into_view).collect())
    }

    pub async fn views_for_host(&self, host_id: Uuid) -> Result<Vec<BookingView>, AppError> {
        let sql = format!("{BOOKING_VIEW_SELECT} WHERE b.host_id = $1 ORDER BY b.created_at DESC");
        let rows = sqlx::query_as::<_, BookingViewRow>(&sql)
            .bind(host_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(BookingViewRow::into_view).collect())
    }

    pub async fn views_all(&self) -> Result<Vec<BookingView>, AppError> {
        let sql = format!("{BOOKING_VIEW_SELECT} ORDER BY b.created_at DESC");
        let rows = sqlx::query_as::<_, BookingViewRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(BookingViewRow::into_view).collect())
    }

    /// Barrido perezoso de completado: las reservas abiertas cuya fecha de
    /// fin ya pasó se marcan completed y sus coches quedan libres. Una sola
    /// sentencia con CTE para que ambos efectos aterricen juntos.
    pub async fn complete_expired(&self, today: NaiveDate) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            WITH expired AS (
                UPDATE bookings SET status = 'completed'
                WHERE status = 'booked' AND end_date <= $1
                RETURNING car_id
            )
            UPDATE cars SET available = TRUE, booked_by = NULL
            FROM expired
            WHERE cars.id = expired.car_id
            "#,
        )
        .bind(today)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
