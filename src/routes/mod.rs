use axum::{Json, Router, http::StatusCode, http::Uri, routing::get};

use crate::{response::ErrorBody, state::AppState};

pub mod doc;
pub mod health;
pub mod params;
pub mod product_masters;
pub mod product_toppings;
pub mod products;
pub mod spicy_levels;
pub mod stores;
pub mod toppings;
pub mod user_stores;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest(
            "/stores",
            stores::router()
                .merge(products::router())
                .merge(user_stores::store_router()),
        )
        .nest("/product-masters", product_masters::router())
        .nest("/toppings", toppings::router())
        .nest("/spicy-levels", spicy_levels::router())
        .nest("/product-toppings", product_toppings::router())
        .nest("/products", product_toppings::product_router())
        .nest("/users", user_stores::user_router())
}

/// Health check, API, docs and the JSON 404 fallback, with state bound.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    tracing::debug!(path = %uri.path(), "no route");
    let body = ErrorBody {
        error: "Not Found".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
