//! DTOs de coches y del dashboard de host

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{car::Car, user::UserSummary};

/// Request de alta de coche. Llega como JSON directo o reconstruido desde
/// los campos de texto de un form multipart.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 60))]
    pub brand: String,

    #[validate(length(min = 1, max = 60))]
    pub model: String,

    #[validate(range(min = 1950, max = 2100))]
    pub year: i32,

    pub color: Option<String>,
    pub license_plate: Option<String>,

    #[validate(range(min = 0.01))]
    pub price_per_day: f64,

    #[validate(length(min = 1, max = 40))]
    pub category: String,

    #[validate(range(min = 1, max = 20))]
    pub seats: i32,

    #[validate(length(min = 1, max = 40))]
    pub transmission: String,

    #[validate(length(min = 1, max = 40))]
    pub fuel_type: String,

    #[validate(length(min = 1, max = 120))]
    pub location: String,

    pub description: Option<String>,
    // para altas JSON sin archivo adjunto
    pub image_path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_cars: i64,
    pub booked_cars: i64,
    pub available_cars: i64,
}

/// Coche con el inquilino activo poblado
#[derive(Debug, Serialize)]
pub struct HostCar {
    #[serde(flatten)]
    pub car: Car,
    pub renter: Option<UserSummary>,
}

#[derive(Debug, Serialize)]
pub struct HostDashboardResponse {
    pub stats: DashboardStats,
    pub cars: Vec<HostCar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateCarRequest {
        CreateCarRequest {
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2022,
            color: Some("White".to_string()),
            license_plate: Some("TOY123".to_string()),
            price_per_day: 35.0,
            category: "economy".to_string(),
            seats: 5,
            transmission: "automatic".to_string(),
            fuel_type: "petrol".to_string(),
            location: "New York".to_string(),
            description: Some("Fuel-efficient and reliable compact car.".to_string()),
            image_path: None,
        }
    }

    #[test]
    fn accepts_a_complete_listing() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_nonpositive_price_and_zero_seats() {
        let mut request = valid_request();
        request.price_per_day = 0.0;
        request.seats = 0;
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price_per_day"));
        assert!(errors.field_errors().contains_key("seats"));
    }
}
