//! Request extractors that reject with [`AppError`] so malformed input gets
//! the same JSON error body as everything else.

use std::str::FromStr;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body; any parse failure becomes `400 Invalid request body`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                Err(AppError::BadRequest("Invalid request body".into()))
            }
        }
    }
}

/// Query string; any parse failure becomes `400 Invalid query parameters`.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected query string");
                Err(AppError::BadRequest("Invalid query parameters".into()))
            }
        }
    }
}

/// Parses a raw path segment, mapping failure to a 400 carrying `message`.
pub fn parse_id<T: FromStr>(raw: &str, message: &str) -> Result<T, AppError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::BadRequest(message.to_string()))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn numeric_ids() {
        assert_eq!(parse_id::<i32>("42", "Invalid product ID").unwrap(), 42);
        let err = parse_id::<i32>("abc", "Invalid product ID").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "Invalid product ID"));
    }

    #[test]
    fn uuid_ids() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id::<Uuid>(&id.to_string(), "Invalid store ID").unwrap(), id);
        assert!(parse_id::<Uuid>("store-123", "Invalid store ID").is_err());
    }
}
