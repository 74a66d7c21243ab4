use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::CreateBookingRequest;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/mine", get(my_bookings))
        .route("/host", get(host_bookings))
        .route("/cancel/:booking_id", post(cancel_booking))
        .route("/:car_id", post(create_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(car_id): Path<Uuid>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking = BookingController::new(&state)
        .create(&user, car_id, request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Car booked successfully", "booking": booking })),
    ))
}

async fn my_bookings(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Value>, AppError> {
    let bookings = BookingController::new(&state).mine(&user).await?;
    Ok(Json(json!({ "bookings": bookings })))
}

async fn host_bookings(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Value>, AppError> {
    let bookings = BookingController::new(&state).for_host(&user).await?;
    Ok(Json(json!({ "bookings": bookings })))
}

async fn cancel_booking(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    BookingController::new(&state).cancel(&user, booking_id).await?;
    Ok(Json(json!({ "message": "Booking cancelled successfully" })))
}
