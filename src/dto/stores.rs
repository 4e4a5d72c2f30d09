use serde::Deserialize;
use utoipa::ToSchema;

use crate::entity::Status;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStoreRequest {
    pub store_name: String,
    pub store_address: String,
    pub store_phone: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateStoreRequest {
    pub store_name: Option<String>,
    pub store_address: Option<String>,
    pub store_phone: Option<String>,
    pub status: Option<Status>,
}
