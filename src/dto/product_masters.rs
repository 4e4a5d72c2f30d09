use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::Status;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductMasterRequest {
    pub product_name: String,
    /// Missing or null is stored as an empty list.
    #[serde(default)]
    pub category: Option<Vec<String>>,
    pub sku: String,
    #[serde(default)]
    pub description: String,
    pub user_created: Option<Uuid>,
    pub price: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductMasterRequest {
    pub product_name: Option<String>,
    pub category: Option<Vec<String>>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub user_updated: Option<Uuid>,
    pub price: Option<i64>,
}
