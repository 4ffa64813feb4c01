use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::errors::AppError;

/// Largest JSON body accepted, in bytes.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// A request body already parsed as JSON by [`parse_json_body`].
#[derive(Clone, Debug, PartialEq)]
pub struct JsonBody(pub Value);

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Middleware parsing JSON request bodies once, before routing.
///
/// Malformed JSON is answered with `400 INVALID_JSON`. A parsed document is
/// attached as a [`JsonBody`] extension and the raw bytes are put back so
/// `Json<T>` extractors downstream still work. Non-JSON and empty bodies pass
/// through untouched.
pub async fn parse_json_body(request: Request, next: Next) -> Response {
    if !is_json(&request) {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match to_bytes(body, JSON_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return AppError::BadRequest(format!("Failed to read request body: {}", e))
                .into_response();
        }
    };

    if !bytes.is_empty() {
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => {
                parts.extensions.insert(JsonBody(value));
            }
            Err(e) => return AppError::InvalidJson(e.to_string()).into_response(),
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
