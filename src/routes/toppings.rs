use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::toppings::{CreateToppingRequest, UpdateToppingRequest},
    error::AppResult,
    extract::{JsonBody, parse_id},
    models::Topping,
    response::ErrorBody,
    routes::product_toppings,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_toppings).post(create_topping))
        .route(
            "/{id}",
            get(get_topping).put(update_topping).delete(delete_topping),
        )
        .route("/{id}/products", get(product_toppings::list_by_topping))
}

pub(crate) fn topping_id(raw: &str) -> AppResult<i32> {
    parse_id(raw, "Invalid topping ID")
}

#[utoipa::path(
    get,
    path = "/api/toppings",
    responses(
        (status = 200, description = "All toppings", body = Vec<Topping>)
    ),
    tag = "Toppings"
)]
pub async fn list_toppings(State(state): State<AppState>) -> AppResult<Json<Vec<Topping>>> {
    Ok(Json(state.toppings.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/toppings/{id}",
    params(
        ("id" = i32, Path, description = "Topping ID")
    ),
    responses(
        (status = 200, description = "Get topping", body = Topping),
        (status = 400, description = "Invalid topping ID", body = ErrorBody),
        (status = 404, description = "Topping not found", body = ErrorBody),
    ),
    tag = "Toppings"
)]
pub async fn get_topping(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Topping>> {
    Ok(Json(state.toppings.get(topping_id(&id)?).await?))
}

#[utoipa::path(
    post,
    path = "/api/toppings",
    request_body = CreateToppingRequest,
    responses(
        (status = 201, description = "Topping created as draft", body = Topping),
        (status = 400, description = "Invalid request body", body = ErrorBody),
    ),
    tag = "Toppings"
)]
pub async fn create_topping(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateToppingRequest>,
) -> AppResult<(StatusCode, Json<Topping>)> {
    let topping = state.toppings.create(payload).await?;
    Ok((StatusCode::CREATED, Json(topping)))
}

#[utoipa::path(
    put,
    path = "/api/toppings/{id}",
    params(
        ("id" = i32, Path, description = "Topping ID")
    ),
    request_body = UpdateToppingRequest,
    responses(
        (status = 200, description = "Updated topping", body = Topping),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "Topping not found", body = ErrorBody),
    ),
    tag = "Toppings"
)]
pub async fn update_topping(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateToppingRequest>,
) -> AppResult<Json<Topping>> {
    let topping = state.toppings.update(topping_id(&id)?, payload).await?;
    Ok(Json(topping))
}

#[utoipa::path(
    delete,
    path = "/api/toppings/{id}",
    params(
        ("id" = i32, Path, description = "Topping ID")
    ),
    responses(
        (status = 204, description = "Topping removed"),
        (status = 400, description = "Invalid topping ID", body = ErrorBody),
        (status = 404, description = "Topping not found", body = ErrorBody),
    ),
    tag = "Toppings"
)]
pub async fn delete_topping(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.toppings.delete(topping_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
