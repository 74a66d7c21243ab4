//! Modelo de Car
//!
//! Invariante: un coche no disponible lleva la referencia al inquilino activo
//! en booked_by; un coche disponible la lleva en NULL.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Car - mapea exactamente a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub host_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub price_per_day: Decimal,
    pub category: String,
    pub seats: i32,
    pub transmission: String,
    pub fuel_type: String,
    pub location: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub available: bool,
    pub booked_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Resumen de un coche para vistas pobladas de reservas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarSummary {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub price_per_day: f64,
    pub image_path: Option<String>,
    pub location: Option<String>,
}
