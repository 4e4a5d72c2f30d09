use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::user_stores::AssignUserRequest,
    error::AppResult,
    extract::{JsonBody, parse_id},
    models::UserStore,
    response::ErrorBody,
    routes::stores::store_id,
    state::AppState,
};

/// Membership routes merged under `/stores`.
pub fn store_router() -> Router<AppState> {
    Router::new()
        .route("/{id}/users", get(list_store_users).post(assign_user))
        .route("/{id}/users/{user_id}", delete(remove_user))
}

/// Routes under `/users`.
pub fn user_router() -> Router<AppState> {
    Router::new().route("/{id}/stores", get(list_user_stores))
}

fn user_id(raw: &str) -> AppResult<Uuid> {
    parse_id(raw, "Invalid user ID")
}

#[utoipa::path(
    post,
    path = "/api/stores/{id}/users",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    request_body = AssignUserRequest,
    responses(
        (status = 201, description = "User assigned to store", body = UserStore),
        (status = 400, description = "Invalid input or already assigned", body = ErrorBody),
        (status = 404, description = "Store not found", body = ErrorBody),
    ),
    tag = "Store Members"
)]
pub async fn assign_user(
    State(state): State<AppState>,
    Path(store): Path<String>,
    JsonBody(payload): JsonBody<AssignUserRequest>,
) -> AppResult<(StatusCode, Json<UserStore>)> {
    let membership = state.user_stores.assign(store_id(&store)?, payload).await?;
    Ok((StatusCode::CREATED, Json(membership)))
}

#[utoipa::path(
    get,
    path = "/api/stores/{id}/users",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Current members of the store", body = Vec<UserStore>),
        (status = 400, description = "Invalid store ID", body = ErrorBody),
    ),
    tag = "Store Members"
)]
pub async fn list_store_users(
    State(state): State<AppState>,
    Path(store): Path<String>,
) -> AppResult<Json<Vec<UserStore>>> {
    let members = state.user_stores.list_by_store(store_id(&store)?).await?;
    Ok(Json(members))
}

#[utoipa::path(
    delete,
    path = "/api/stores/{id}/users/{user_id}",
    params(
        ("id" = Uuid, Path, description = "Store ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Membership archived"),
        (status = 400, description = "Invalid ID", body = ErrorBody),
        (status = 404, description = "Store membership not found", body = ErrorBody),
    ),
    tag = "Store Members"
)]
pub async fn remove_user(
    State(state): State<AppState>,
    Path((store, user)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let (store, user) = (store_id(&store)?, user_id(&user)?);
    state.user_stores.remove(store, user).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/stores",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Current memberships of the user", body = Vec<UserStore>),
        (status = 400, description = "Invalid user ID", body = ErrorBody),
    ),
    tag = "Store Members"
)]
pub async fn list_user_stores(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> AppResult<Json<Vec<UserStore>>> {
    let memberships = state.user_stores.list_by_user(user_id(&user)?).await?;
    Ok(Json(memberships))
}
