//! Controlador del ledger de reservas
//!
//! La transición central del sistema: crear una reserva voltea la
//! disponibilidad del coche con un update condicional (compare-and-swap),
//! y el registro del ledger solo se inserta si ese flip reportó una fila.

use chrono::Utc;
use uuid::Uuid;

use crate::dto::booking_dto::{BookingView, CreateBookingRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::booking::{rental_days, total_price, Booking};
use crate::models::user::Role;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::car_repository::CarRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct BookingController {
    bookings: BookingRepository,
    cars: CarRepository,
}

impl BookingController {
    pub fn new(state: &AppState) -> Self {
        Self {
            bookings: BookingRepository::new(state.pool.clone()),
            cars: CarRepository::new(state.pool.clone()),
        }
    }

    pub async fn create(
        &self,
        caller: &AuthenticatedUser,
        car_id: Uuid,
        request: CreateBookingRequest,
    ) -> Result<Booking, AppError> {
        caller.require_role(&[Role::Customer])?;

        // El rango se valida antes de tocar ningún registro
        let days = rental_days(request.start_date, request.end_date);
        if days <= 0 {
            return Err(AppError::BadRequest(
                "End date must be after start date".to_string(),
            ));
        }

        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        if !car.available {
            return Err(AppError::Conflict("Car already booked".to_string()));
        }

        let price = total_price(days, car.price_per_day);

        // CAS: de dos peticiones simultáneas solo una gana el flip; la otra
        // observa el conflicto sin que existan dos reservas abiertas.
        if !self.cars.reserve(car_id, caller.id).await? {
            return Err(AppError::Conflict("Car already booked".to_string()));
        }

        match self
            .bookings
            .insert(
                car_id,
                caller.id,
                car.host_id,
                request.start_date,
                request.end_date,
                price,
            )
            .await
        {
            Ok(booking) => Ok(booking),
            Err(err) => {
                // Compensación: no dejar el coche bloqueado sin reserva
                if let Err(release_err) = self.cars.release(car_id).await {
                    tracing::error!(
                        "Failed to release car {} after booking insert error: {}",
                        car_id,
                        release_err
                    );
                }
                Err(err)
            }
        }
    }

    pub async fn mine(&self, caller: &AuthenticatedUser) -> Result<Vec<BookingView>, AppError> {
        caller.require_role(&[Role::Customer])?;
        self.sweep_expired().await?;
        self.bookings.views_for_customer(caller.id).await
    }

    pub async fn for_host(&self, caller: &AuthenticatedUser) -> Result<Vec<BookingView>, AppError> {
        caller.require_role(&[Role::Host])?;
        self.sweep_expired().await?;
        self.bookings.views_for_host(caller.id).await
    }

    /// Cancelación por el inquilino original o un admin. Si el coche fue
    /// borrado entre medias, la cancelación sigue completándose y el efecto
    /// sobre el inventario se omite.
    pub async fn cancel(
        &self,
        caller: &AuthenticatedUser,
        booking_id: Uuid,
    ) -> Result<(), AppError> {
        caller.require_role(&[Role::Customer, Role::Admin])?;

        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if caller.role != Role::Admin && booking.customer_id != caller.id {
            return Err(AppError::Forbidden("You are not authorized".to_string()));
        }

        self.bookings.cancel(booking_id).await?;
        self.cars.release(booking.car_id).await?;

        Ok(())
    }

    /// Barrido perezoso del estado completed antes de las lecturas del ledger
    async fn sweep_expired(&self) -> Result<(), AppError> {
        let today = Utc::now().date_naive();
        self.bookings.complete_expired(today).await?;
        Ok(())
    }
}
