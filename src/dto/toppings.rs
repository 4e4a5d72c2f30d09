use serde::Deserialize;
use utoipa::ToSchema;

use crate::entity::Status;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateToppingRequest {
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateToppingRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub status: Option<Status>,
}
