//! Modelo de Booking
//!
//! El ledger de reservas es la fuente autoritativa de las transacciones de
//! alquiler; el flag de disponibilidad del coche es un derivado de él.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Booked,
    Cancelled,
    Completed,
}

/// Booking - mapea exactamente a la tabla bookings
///
/// host_id se desnormaliza del dueño del coche al crear la reserva y queda
/// congelado después.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub car_id: Uuid,
    pub customer_id: Uuid,
    pub host_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Días enteros de alquiler de un rango de fechas. El día final queda
/// excluido del precio: 2024-01-01 a 2024-01-04 son 3 días.
pub fn rental_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days()
}

/// Precio total de una reserva: días enteros por precio diario.
pub fn total_price(days: i64, price_per_day: Decimal) -> Decimal {
    Decimal::from(days) * price_per_day
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn three_day_rental_at_100_costs_300() {
        let days = rental_days(date("2024-01-01"), date("2024-01-04"));
        assert_eq!(days, 3);
        assert_eq!(total_price(days, Decimal::from(100)), Decimal::from(300));
    }

    #[test]
    fn single_day_rental() {
        let days = rental_days(date("2024-06-10"), date("2024-06-11"));
        assert_eq!(days, 1);
        assert_eq!(total_price(days, Decimal::new(3550, 2)), Decimal::new(3550, 2));
    }

    #[test]
    fn equal_dates_yield_zero_days() {
        assert_eq!(rental_days(date("2024-01-01"), date("2024-01-01")), 0);
    }

    #[test]
    fn inverted_range_yields_negative_days() {
        assert!(rental_days(date("2024-01-04"), date("2024-01-01")) < 0);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BookingStatus::Booked).unwrap(), "\"booked\"");
        assert_eq!(serde_json::to_string(&BookingStatus::Cancelled).unwrap(), "\"cancelled\"");
        assert_eq!(serde_json::to_string(&BookingStatus::Completed).unwrap(), "\"completed\"");
    }
}
