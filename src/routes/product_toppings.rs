use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    dto::product_toppings::CreateProductToppingRequest,
    error::AppResult,
    extract::JsonBody,
    models::ProductTopping,
    response::ErrorBody,
    routes::{products::product_id, toppings::topping_id},
    state::AppState,
};

/// Routes under `/product-toppings`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_product_toppings).post(create_product_topping))
}

/// Routes under `/products`.
pub fn product_router() -> Router<AppState> {
    Router::new()
        .route("/{id}/toppings", get(list_by_product))
        .route("/{id}/toppings/{topping_id}", delete(delete_product_topping))
}

#[utoipa::path(
    get,
    path = "/api/product-toppings",
    responses(
        (status = 200, description = "Product toppings with relations", body = Vec<ProductTopping>)
    ),
    tag = "Product Toppings"
)]
pub async fn list_product_toppings(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductTopping>>> {
    Ok(Json(state.product_toppings.list().await?))
}

#[utoipa::path(
    post,
    path = "/api/product-toppings",
    request_body = CreateProductToppingRequest,
    responses(
        (status = 201, description = "Topping linked to product", body = ProductTopping),
        (status = 400, description = "Invalid input", body = ErrorBody),
    ),
    tag = "Product Toppings"
)]
pub async fn create_product_topping(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductToppingRequest>,
) -> AppResult<(StatusCode, Json<ProductTopping>)> {
    let link = state.product_toppings.create(payload).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/toppings",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Toppings linked to the product", body = Vec<ProductTopping>),
        (status = 400, description = "Invalid product ID", body = ErrorBody),
    ),
    tag = "Product Toppings"
)]
pub async fn list_by_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<ProductTopping>>> {
    let links = state.product_toppings.list_by_product(product_id(&id)?).await?;
    Ok(Json(links))
}

#[utoipa::path(
    get,
    path = "/api/toppings/{id}/products",
    params(
        ("id" = i32, Path, description = "Topping ID")
    ),
    responses(
        (status = 200, description = "Products using the topping", body = Vec<ProductTopping>),
        (status = 400, description = "Invalid topping ID", body = ErrorBody),
    ),
    tag = "Product Toppings"
)]
pub async fn list_by_topping(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<ProductTopping>>> {
    let links = state.product_toppings.list_by_topping(topping_id(&id)?).await?;
    Ok(Json(links))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}/toppings/{topping_id}",
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("topping_id" = i32, Path, description = "Topping ID"),
    ),
    responses(
        (status = 204, description = "Link removed"),
        (status = 400, description = "Invalid ID", body = ErrorBody),
        (status = 404, description = "Product topping not found", body = ErrorBody),
    ),
    tag = "Product Toppings"
)]
pub async fn delete_product_topping(
    State(state): State<AppState>,
    Path((product, topping)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let (product, topping) = (product_id(&product)?, topping_id(&topping)?);
    state.product_toppings.delete(product, topping).await?;
    Ok(StatusCode::NO_CONTENT)
}
