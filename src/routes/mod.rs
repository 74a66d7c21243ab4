//! Rutas de la API
//!
//! Un router por dominio, anidados bajo /api.

pub mod admin_routes;
pub mod auth_routes;
pub mod booking_routes;
pub mod car_routes;
pub mod contact_routes;
pub mod host_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api/cars", car_routes::create_car_router())
        .nest("/api/bookings", booking_routes::create_booking_router())
        .nest("/api/host", host_routes::create_host_router())
        .nest("/api/contact", contact_routes::create_contact_router())
        .nest("/api/admin", admin_routes::create_admin_router(state))
}
