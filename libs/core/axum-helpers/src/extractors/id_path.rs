//! Integer id path parameter extractor.

use crate::errors::AppError;
use crate::validation::is_int;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a single integer `{id}` path parameter.
///
/// Accepts the same grammar as the `IsInt` validation check and additionally
/// requires the value to fit an `i32`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product ID: {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        if !is_int(&raw) {
            return Err(AppError::InvalidId(raw).into_response());
        }

        raw.trim_start_matches('+')
            .parse::<i32>()
            .map(IdPath)
            .map_err(|_| AppError::InvalidId(raw.clone()).into_response())
    }
}
