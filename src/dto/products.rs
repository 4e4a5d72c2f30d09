use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::Status;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub product_master_id: Uuid,
    pub price: f64,
    #[serde(default)]
    pub stock_quantity: i32,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
    pub photo: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub product_master_id: Option<Uuid>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub is_active: Option<bool>,
    pub status: Option<Status>,
    pub photo: Option<String>,
}
