//! Controlador de la superficie administrativa
//!
//! Lecturas y borrados sobre todas las entidades. Los borrados son
//! incondicionales por id, sin cascada; las rutas de lectura y la
//! cancelación toleran las referencias colgantes resultantes.

use chrono::Utc;
use uuid::Uuid;

use crate::dto::admin_dto::{AdminCar, AdminStats};
use crate::dto::booking_dto::BookingView;
use crate::models::message::ContactMessage;
use crate::models::user::{Role, User, UserSummary};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::message_repository::MessageRepository;
use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AdminController {
    users: UserRepository,
    cars: CarRepository,
    bookings: BookingRepository,
    messages: MessageRepository,
}

impl AdminController {
    pub fn new(state: &AppState) -> Self {
        Self {
            users: UserRepository::new(state.pool.clone()),
            cars: CarRepository::new(state.pool.clone()),
            bookings: BookingRepository::new(state.pool.clone()),
            messages: MessageRepository::new(state.pool.clone()),
        }
    }

    pub async fn stats(&self) -> Result<AdminStats, AppError> {
        Ok(AdminStats {
            total_users: self.users.count_by_role(Role::Customer).await?,
            total_hosts: self.users.count_by_role(Role::Host).await?,
            total_cars: self.cars.count().await?,
            total_bookings: self.bookings.count().await?,
            total_messages: self.messages.count().await?,
        })
    }

    pub async fn customers(&self) -> Result<Vec<User>, AppError> {
        self.users.list_by_role(Role::Customer).await
    }

    pub async fn hosts(&self) -> Result<Vec<User>, AppError> {
        self.users.list_by_role(Role::Host).await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), AppError> {
        self.users.delete(id).await
    }

    pub async fn cars(&self) -> Result<Vec<AdminCar>, AppError> {
        let rows = self.cars.list_all_with_host().await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let host = row.host_username.map(|username| UserSummary {
                    id: row.car.host_id,
                    username,
                    email: row.host_email.unwrap_or_default(),
                });
                AdminCar { car: row.car, host }
            })
            .collect())
    }

    pub async fn delete_car(&self, id: Uuid) -> Result<(), AppError> {
        self.cars.delete(id).await
    }

    pub async fn bookings(&self) -> Result<Vec<BookingView>, AppError> {
        self.bookings.complete_expired(Utc::now().date_naive()).await?;
        self.bookings.views_all().await
    }

    /// Mismo efecto que la cancelación del inquilino, sin chequeo de
    /// propiedad: el rol admin está permitido universalmente.
    pub async fn cancel_booking(&self, id: Uuid) -> Result<(), AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        self.bookings.cancel(id).await?;
        self.cars.release(booking.car_id).await?;

        Ok(())
    }

    pub async fn messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.messages.list().await
    }

    pub async fn delete_message(&self, id: Uuid) -> Result<(), AppError> {
        self.messages.delete(id).await
    }
}
