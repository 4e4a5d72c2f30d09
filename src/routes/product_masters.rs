use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::product_masters::{CreateProductMasterRequest, UpdateProductMasterRequest},
    error::AppResult,
    extract::{JsonBody, QueryParams, parse_id},
    models::ProductMaster,
    response::{ErrorBody, Page},
    routes::params::ProductMasterQuery,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_product_masters).post(create_product_master))
        .route(
            "/{id}",
            get(get_product_master)
                .put(update_product_master)
                .delete(delete_product_master),
        )
}

fn master_id(raw: &str) -> AppResult<Uuid> {
    parse_id(raw, "Invalid product master ID")
}

#[utoipa::path(
    post,
    path = "/api/product-masters",
    request_body = CreateProductMasterRequest,
    responses(
        (status = 201, description = "Product master created as draft", body = ProductMaster),
        (status = 400, description = "Invalid request body", body = ErrorBody),
    ),
    tag = "Product Masters"
)]
pub async fn create_product_master(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductMasterRequest>,
) -> AppResult<(StatusCode, Json<ProductMaster>)> {
    let master = state.product_masters.create(payload).await?;
    Ok((StatusCode::CREATED, Json(master)))
}

#[utoipa::path(
    get,
    path = "/api/product-masters",
    params(ProductMasterQuery),
    responses(
        (status = 200, description = "Published product masters", body = Page<ProductMaster>),
        (status = 400, description = "Invalid query parameters", body = ErrorBody),
    ),
    tag = "Product Masters"
)]
pub async fn list_product_masters(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ProductMasterQuery>,
) -> AppResult<Json<Page<ProductMaster>>> {
    let page = state.product_masters.list(query).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/product-masters/{id}",
    params(
        ("id" = Uuid, Path, description = "Product master ID")
    ),
    responses(
        (status = 200, description = "Get product master", body = ProductMaster),
        (status = 400, description = "Invalid product master ID", body = ErrorBody),
        (status = 404, description = "Product master not found", body = ErrorBody),
    ),
    tag = "Product Masters"
)]
pub async fn get_product_master(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductMaster>> {
    let master = state.product_masters.get(master_id(&id)?).await?;
    Ok(Json(master))
}

#[utoipa::path(
    put,
    path = "/api/product-masters/{id}",
    params(
        ("id" = Uuid, Path, description = "Product master ID")
    ),
    request_body = UpdateProductMasterRequest,
    responses(
        (status = 200, description = "Updated product master", body = ProductMaster),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "Product master not found", body = ErrorBody),
    ),
    tag = "Product Masters"
)]
pub async fn update_product_master(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateProductMasterRequest>,
) -> AppResult<Json<ProductMaster>> {
    let master = state.product_masters.update(master_id(&id)?, payload).await?;
    Ok(Json(master))
}

#[utoipa::path(
    delete,
    path = "/api/product-masters/{id}",
    params(
        ("id" = Uuid, Path, description = "Product master ID")
    ),
    responses(
        (status = 204, description = "Product master archived"),
        (status = 404, description = "Product master not found", body = ErrorBody),
    ),
    tag = "Product Masters"
)]
pub async fn delete_product_master(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.product_masters.delete(master_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
