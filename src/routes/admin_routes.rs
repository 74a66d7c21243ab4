use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{AdminCar, AdminStats};
use crate::dto::booking_dto::BookingView;
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::models::message::ContactMessage;
use crate::models::user::User;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router administrativo: toda la superficie queda detrás del gate admin
pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats))
        .route("/users", get(users))
        .route("/hosts", get(hosts))
        .route("/user/:id", delete(delete_user))
        .route("/cars", get(cars))
        .route("/car/:id", delete(delete_car))
        .route("/bookings", get(bookings))
        .route("/booking/cancel/:id", post(cancel_booking))
        .route("/messages", get(messages))
        .route("/message/:id", delete(delete_message))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn stats(State(state): State<AppState>) -> Result<Json<AdminStats>, AppError> {
    Ok(Json(AdminController::new(&state).stats().await?))
}

async fn users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(AdminController::new(&state).customers().await?))
}

async fn hosts(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(AdminController::new(&state).hosts().await?))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    AdminController::new(&state).delete_user(id).await?;
    Ok(Json(json!({ "message": "User removed" })))
}

async fn cars(State(state): State<AppState>) -> Result<Json<Vec<AdminCar>>, AppError> {
    Ok(Json(AdminController::new(&state).cars().await?))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    AdminController::new(&state).delete_car(id).await?;
    Ok(Json(json!({ "message": "Car deleted" })))
}

async fn bookings(State(state): State<AppState>) -> Result<Json<Vec<BookingView>>, AppError> {
    Ok(Json(AdminController::new(&state).bookings().await?))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    AdminController::new(&state).cancel_booking(id).await?;
    Ok(Json(json!({ "message": "Booking cancelled" })))
}

async fn messages(State(state): State<AppState>) -> Result<Json<Vec<ContactMessage>>, AppError> {
    Ok(Json(AdminController::new(&state).messages().await?))
}

async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    AdminController::new(&state).delete_message(id).await?;
    Ok(Json(json!({ "message": "Message deleted" })))
}
