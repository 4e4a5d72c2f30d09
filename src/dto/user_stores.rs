use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignUserRequest {
    pub user_id: Uuid,
    /// Free-form role label, e.g. `owner` or `cashier`.
    pub role_in_store: String,
}
