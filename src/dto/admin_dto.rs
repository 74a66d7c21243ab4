//! DTOs de la superficie administrativa

use serde::Serialize;

use crate::models::{car::Car, user::UserSummary};

/// Contadores agregados del panel de administración
#[derive(Debug, Serialize)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_hosts: i64,
    pub total_cars: i64,
    pub total_bookings: i64,
    pub total_messages: i64,
}

/// Coche con el host propietario poblado
#[derive(Debug, Serialize)]
pub struct AdminCar {
    #[serde(flatten)]
    pub car: Car,
    pub host: Option<UserSummary>,
}
