use serde::Serialize;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// One page of a paginated listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub limit: u64,
}

impl<T: Serialize> Page<T> {
    pub fn new(data: Vec<T>, page: u64, limit: u64) -> Self {
        Self { data, page, limit }
    }
}
