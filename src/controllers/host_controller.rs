//! Controlador del dashboard de host

use crate::dto::car_dto::{DashboardStats, HostCar, HostDashboardResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::{Role, UserSummary};
use crate::repositories::car_repository::CarRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct HostController {
    cars: CarRepository,
}

impl HostController {
    pub fn new(state: &AppState) -> Self {
        Self {
            cars: CarRepository::new(state.pool.clone()),
        }
    }

    /// Proyección pura del inventario: coches del host con el inquilino
    /// activo poblado y contadores derivados.
    pub async fn dashboard(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<HostDashboardResponse, AppError> {
        caller.require_role(&[Role::Host])?;

        let rows = self.cars.list_by_host_with_renter(caller.id).await?;

        let total_cars = rows.len() as i64;
        let booked_cars = rows.iter().filter(|row| !row.car.available).count() as i64;

        let cars = rows
            .into_iter()
            .map(|row| {
                let renter = match (row.car.booked_by, row.renter_username) {
                    (Some(id), Some(username)) => Some(UserSummary {
                        id,
                        username,
                        email: row.renter_email.unwrap_or_default(),
                    }),
                    _ => None,
                };
                HostCar { car: row.car, renter }
            })
            .collect();

        Ok(HostDashboardResponse {
            stats: DashboardStats {
                total_cars,
                booked_cars,
                available_cars: total_cars - booked_cars,
            },
            cars,
        })
    }
}
