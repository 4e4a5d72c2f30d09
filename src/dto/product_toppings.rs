use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductToppingRequest {
    pub product_id: i32,
    pub topping_id: i32,
}
