//! Controlador de inventario de coches

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use axum::extract::Multipart;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::dto::car_dto::CreateCarRequest;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::car::Car;
use crate::models::user::Role;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::car_repository::CarRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::allowed_image_extension;

const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub struct CarController {
    cars: CarRepository,
    bookings: BookingRepository,
}

impl CarController {
    pub fn new(state: &AppState) -> Self {
        Self {
            cars: CarRepository::new(state.pool.clone()),
            bookings: BookingRepository::new(state.pool.clone()),
        }
    }

    pub async fn create(
        &self,
        caller: &AuthenticatedUser,
        request: CreateCarRequest,
    ) -> Result<Car, AppError> {
        caller.require_role(&[Role::Host])?;
        request.validate()?;

        let price_per_day = Decimal::from_f64_retain(request.price_per_day)
            .ok_or_else(|| AppError::BadRequest("Invalid price value".to_string()))?;

        self.cars
            .create(
                caller.id,
                request.brand,
                request.model,
                request.year,
                request.color,
                request.license_plate,
                price_per_day,
                request.category,
                request.seats,
                request.transmission,
                request.fuel_type,
                request.location,
                request.description,
                request.image_path,
            )
            .await
    }

    /// Colección pública: solo coches disponibles
    pub async fn list_available(&self) -> Result<Vec<Car>, AppError> {
        self.cars.list_available().await
    }

    pub async fn my_cars(&self, caller: &AuthenticatedUser) -> Result<Vec<Car>, AppError> {
        caller.require_role(&[Role::Host])?;
        self.cars.list_by_host(caller.id).await
    }

    /// Borrado por el host propietario. Un coche con una reserva abierta se
    /// rechaza con conflicto (política referencial elegida en el API).
    pub async fn delete(&self, caller: &AuthenticatedUser, car_id: Uuid) -> Result<(), AppError> {
        caller.require_role(&[Role::Host])?;

        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        if car.host_id != caller.id {
            return Err(AppError::Forbidden(
                "Not authorized to delete this car".to_string(),
            ));
        }

        if self.bookings.open_booking_exists(car_id).await? {
            return Err(AppError::Conflict(
                "Car has an active booking".to_string(),
            ));
        }

        self.cars.delete(car_id).await
    }
}

/// Reconstruir un CreateCarRequest desde un form multipart, guardando el
/// archivo adjunto `image` bajo el directorio de uploads con nombre único.
pub async fn car_request_from_multipart(
    mut multipart: Multipart,
    upload_dir: &str,
) -> Result<CreateCarRequest, AppError> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut image_path: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("Invalid multipart body: {}", err)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let extension = allowed_image_extension(&file_name).ok_or_else(|| {
                AppError::BadRequest("Only image files are allowed".to_string())
            })?;

            let data = field
                .bytes()
                .await
                .map_err(|err| AppError::BadRequest(format!("Invalid image upload: {}", err)))?;

            if data.len() > MAX_IMAGE_BYTES {
                return Err(AppError::BadRequest(
                    "Image exceeds the 5 MB limit".to_string(),
                ));
            }

            let unique_name = format!("image-{}.{}", Uuid::new_v4(), extension);
            tokio::fs::create_dir_all(upload_dir)
                .await
                .map_err(|err| AppError::Internal(format!("Error creating upload dir: {}", err)))?;
            tokio::fs::write(Path::new(upload_dir).join(&unique_name), &data)
                .await
                .map_err(|err| AppError::Internal(format!("Error saving image: {}", err)))?;

            image_path = Some(format!("uploads/{}", unique_name));
        } else {
            let value = field
                .text()
                .await
                .map_err(|err| AppError::BadRequest(format!("Invalid field {}: {}", name, err)))?;
            fields.insert(name, value);
        }
    }

    // image_path directo en el form tiene menor prioridad que el archivo
    if image_path.is_none() {
        image_path = fields.remove("image_path").filter(|path| !path.trim().is_empty());
    }

    Ok(CreateCarRequest {
        brand: required_field(&mut fields, "brand")?,
        model: required_field(&mut fields, "model")?,
        year: parsed_field(&mut fields, "year")?,
        color: fields.remove("color"),
        license_plate: fields.remove("license_plate"),
        price_per_day: parsed_field(&mut fields, "price_per_day")?,
        category: required_field(&mut fields, "category")?,
        seats: parsed_field(&mut fields, "seats")?,
        transmission: required_field(&mut fields, "transmission")?,
        fuel_type: required_field(&mut fields, "fuel_type")?,
        location: required_field(&mut fields, "location")?,
        description: fields.remove("description"),
        image_path,
    })
}

fn required_field(
    fields: &mut HashMap<String, String>,
    key: &'static str,
) -> Result<String, AppError> {
    fields
        .remove(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", key)))
}

fn parsed_field<T: FromStr>(
    fields: &mut HashMap<String, String>,
    key: &'static str,
) -> Result<T, AppError> {
    required_field(fields, key)?
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("{} is not a valid number", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_field_rejects_blank_values() {
        let mut fields = HashMap::from([("brand".to_string(), "  ".to_string())]);
        assert!(required_field(&mut fields, "brand").is_err());
        assert!(required_field(&mut fields, "missing").is_err());
    }

    #[test]
    fn parsed_field_reads_numbers() {
        let mut fields = HashMap::from([
            ("year".to_string(), "2022".to_string()),
            ("price_per_day".to_string(), "35.5".to_string()),
        ]);
        let year: i32 = parsed_field(&mut fields, "year").unwrap();
        let price: f64 = parsed_field(&mut fields, "price_per_day").unwrap();
        assert_eq!(year, 2022);
        assert_eq!(price, 35.5);
    }

    #[test]
    fn parsed_field_rejects_garbage() {
        let mut fields = HashMap::from([("seats".to_string(), "five".to_string())]);
        assert!(parsed_field::<i32>(&mut fields, "seats").is_err());
    }
}
