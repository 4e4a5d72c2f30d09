use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{error::AppResult, models::SpicyLevel, response::ErrorBody, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_spicy_levels))
        .route("/{id}", get(get_spicy_level))
}

#[utoipa::path(
    get,
    path = "/api/spicy-levels",
    responses(
        (status = 200, description = "All spicy levels", body = Vec<SpicyLevel>)
    ),
    tag = "Spicy Levels"
)]
pub async fn list_spicy_levels(State(state): State<AppState>) -> Json<Vec<SpicyLevel>> {
    Json(state.spicy_levels.list())
}

#[utoipa::path(
    get,
    path = "/api/spicy-levels/{id}",
    params(
        ("id" = String, Path, description = "Spicy level ID")
    ),
    responses(
        (status = 200, description = "Get spicy level", body = SpicyLevel),
        (status = 404, description = "Spicy level not found", body = ErrorBody),
    ),
    tag = "Spicy Levels"
)]
pub async fn get_spicy_level(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SpicyLevel>> {
    Ok(Json(state.spicy_levels.get(&id)?))
}
