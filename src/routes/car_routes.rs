use axum::{
    extract::{DefaultBodyLimit, FromRequest, Multipart, Path, Request, State},
    http::{header, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::car_controller::{car_request_from_multipart, CarController};
use crate::dto::car_dto::CreateCarRequest;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::car::Car;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars))
        .route("/", post(create_car))
        .route("/host/mine", get(my_cars))
        .route("/:id", delete(delete_car))
        // margen para la imagen de 5 MB más los campos del form
        .layer(DefaultBodyLimit::max(8 * 1024 * 1024))
}

/// Colección pública: solo coches disponibles
async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = CarController::new(&state).list_available().await?;
    Ok(Json(cars))
}

/// Alta de coche (solo host). Acepta form multipart con archivo `image`
/// o JSON directo con un image_path opcional.
async fn create_car(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    request: Request,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let payload = if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|err| AppError::BadRequest(format!("Invalid multipart body: {}", err)))?;
        car_request_from_multipart(multipart, &state.config.upload_dir).await?
    } else {
        let Json(body) = Json::<CreateCarRequest>::from_request(request, &state)
            .await
            .map_err(|err| AppError::BadRequest(format!("Invalid JSON body: {}", err)))?;
        body
    };

    let car = CarController::new(&state).create(&user, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Car added successfully", "car": car })),
    ))
}

async fn my_cars(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Car>>, AppError> {
    let cars = CarController::new(&state).my_cars(&user).await?;
    Ok(Json(cars))
}

async fn delete_car(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    CarController::new(&state).delete(&user, id).await?;
    Ok(Json(json!({ "message": "Car deleted successfully" })))
}
