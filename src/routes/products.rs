use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::AppResult,
    extract::{JsonBody, QueryParams, parse_id},
    models::Product,
    response::ErrorBody,
    routes::{params::Pagination, stores::store_id},
    state::AppState,
};

/// Store-scoped product routes, merged under `/stores`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/products", get(list_products).post(create_product))
        .route(
            "/{id}/products/{product_id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub(crate) fn product_id(raw: &str) -> AppResult<i32> {
    parse_id(raw, "Invalid product ID")
}

#[utoipa::path(
    post,
    path = "/api/stores/{id}/products",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created as draft", body = Product),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "Store not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Path(store): Path<String>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.products.create(store_id(&store)?, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/api/stores/{id}/products",
    params(
        ("id" = Uuid, Path, description = "Store ID"),
        ("page" = Option<u64>, Query, description = "Page number, default 1"),
        ("limit" = Option<u64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "Published products of the store", body = Vec<Product>),
        (status = 400, description = "Invalid store ID", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Path(store): Path<String>,
    QueryParams(pagination): QueryParams<Pagination>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.list(store_id(&store)?, pagination).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/stores/{id}/products/{product_id}",
    params(
        ("id" = Uuid, Path, description = "Store ID"),
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, description = "Product with master and published toppings", body = Product),
        (status = 400, description = "Invalid ID", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path((store, id)): Path<(String, String)>,
) -> AppResult<Json<Product>> {
    let (store, id) = (store_id(&store)?, product_id(&id)?);
    let product = state.products.get(store, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/api/stores/{id}/products/{product_id}",
    params(
        ("id" = Uuid, Path, description = "Store ID"),
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path((store, id)): Path<(String, String)>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> AppResult<Json<Product>> {
    let (store, id) = (store_id(&store)?, product_id(&id)?);
    let product = state.products.update(store, id, payload).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/stores/{id}/products/{product_id}",
    params(
        ("id" = Uuid, Path, description = "Store ID"),
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 204, description = "Product archived"),
        (status = 400, description = "Invalid ID", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path((store, id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let (store, id) = (store_id(&store)?, product_id(&id)?);
    state.products.delete(store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
