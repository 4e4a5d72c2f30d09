use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::stores::{CreateStoreRequest, UpdateStoreRequest},
    entity::Status,
    error::AppResult,
    extract::{JsonBody, parse_id},
    models::Store,
    response::ErrorBody,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route("/{id}", get(get_store).put(update_store).delete(delete_store))
}

pub(crate) fn store_id(raw: &str) -> AppResult<Uuid> {
    parse_id(raw, "Invalid store ID")
}

#[utoipa::path(
    post,
    path = "/api/stores",
    request_body = CreateStoreRequest,
    responses(
        (status = 201, description = "Store created as draft", body = Store),
        (status = 400, description = "Invalid request body", body = ErrorBody),
    ),
    tag = "Stores"
)]
pub async fn create_store(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateStoreRequest>,
) -> AppResult<(StatusCode, Json<Store>)> {
    let store = state.stores.create(payload).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

#[utoipa::path(
    get,
    path = "/api/stores",
    responses(
        (status = 200, description = "Published stores", body = Vec<Store>)
    ),
    tag = "Stores"
)]
pub async fn list_stores(State(state): State<AppState>) -> AppResult<Json<Vec<Store>>> {
    let stores = state.stores.list(Some(Status::Published)).await?;
    Ok(Json(stores))
}

#[utoipa::path(
    get,
    path = "/api/stores/{id}",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Get store", body = Store),
        (status = 400, description = "Invalid store ID", body = ErrorBody),
        (status = 404, description = "Store not found", body = ErrorBody),
    ),
    tag = "Stores"
)]
pub async fn get_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Store>> {
    let store = state.stores.get(store_id(&id)?).await?;
    Ok(Json(store))
}

#[utoipa::path(
    put,
    path = "/api/stores/{id}",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    request_body = UpdateStoreRequest,
    responses(
        (status = 200, description = "Updated store", body = Store),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "Store not found", body = ErrorBody),
    ),
    tag = "Stores"
)]
pub async fn update_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateStoreRequest>,
) -> AppResult<Json<Store>> {
    let store = state.stores.update(store_id(&id)?, payload).await?;
    Ok(Json(store))
}

#[utoipa::path(
    delete,
    path = "/api/stores/{id}",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 204, description = "Store archived"),
        (status = 404, description = "Store not found", body = ErrorBody),
    ),
    tag = "Stores"
)]
pub async fn delete_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.stores.delete(store_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
