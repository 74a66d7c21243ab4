use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use crate::controllers::contact_controller::ContactController;
use crate::dto::contact_dto::ContactMessageRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contact_router() -> Router<AppState> {
    Router::new().route("/", post(submit_message))
}

async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<ContactMessageRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    ContactController::new(&state).submit(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Message received" })),
    ))
}
