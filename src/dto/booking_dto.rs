//! DTOs de reservas

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{booking::BookingStatus, car::CarSummary, user::UserSummary};

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Vista poblada de una reserva: el coche y las cuentas referenciadas van
/// como resúmenes; None cuando el registro referenciado ya no existe.
#[derive(Debug, Serialize)]
pub struct BookingView {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub car: Option<CarSummary>,
    pub customer: Option<UserSummary>,
    pub host: Option<UserSummary>,
}
