use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::host_controller::HostController;
use crate::dto::car_dto::HostDashboardResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_host_router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

async fn dashboard(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<HostDashboardResponse>, AppError> {
    let response = HostController::new(&state).dashboard(&user).await?;
    Ok(Json(response))
}
