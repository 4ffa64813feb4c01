use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, RawPathParams, Request, State},
    http::StatusCode,
    middleware::{from_fn, from_fn_with_state, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
    Json,
};

use super::rules::{evaluate, FieldError, InputErrors, RuleSet};
use crate::http::JsonBody;

/// Failures recorded by [`validate_request`] for the current request.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors(pub Vec<FieldError>);

/// Middleware evaluating `rules` against the request and recording the
/// outcome as a [`FieldErrors`] extension. Never rejects on its own.
///
/// Body rules read the [`JsonBody`] left by `parse_json_body`; without it
/// every body field counts as absent.
pub async fn validate_request(State(rules): State<RuleSet>, request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();

    let params: HashMap<String, String> = match RawPathParams::from_request_parts(&mut parts, &()).await {
        Ok(raw) => raw
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
        Err(_) => HashMap::new(),
    };

    let errors = {
        let document = parts.extensions.get::<JsonBody>().map(|JsonBody(value)| value);
        evaluate(rules, &params, document)
    };

    if !errors.is_empty() {
        tracing::debug!(failures = errors.len(), "Request failed input rules");
    }

    parts.extensions.insert(FieldErrors(errors));
    next.run(Request::from_parts(parts, body)).await
}

/// Middleware answering `400 {"errors": [...]}` when [`validate_request`]
/// recorded failures; otherwise the request continues unchanged.
pub async fn handle_input_errors(request: Request, next: Next) -> Response {
    match request.extensions().get::<FieldErrors>() {
        Some(FieldErrors(errors)) if !errors.is_empty() => (
            StatusCode::BAD_REQUEST,
            Json(InputErrors {
                errors: errors.clone(),
            }),
        )
            .into_response(),
        _ => next.run(request).await,
    }
}

/// Put `rules` in front of a route: rules first, then the error gate, then
/// the handler.
pub fn with_rules<S>(route: MethodRouter<S>, rules: RuleSet) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route
        .layer(from_fn(handle_input_errors))
        .layer(from_fn_with_state(rules, validate_request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::parse_json_body;
    use crate::validation::{Check, Location, Rule};
    use axum::{
        body::Body,
        http::header,
        routing::{get, post},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const ID_RULES: RuleSet = &[Rule::new("id", Location::Params, Check::IsInt, "Invalid ID")];
    const BODY_RULES: RuleSet = &[
        Rule::new("name", Location::Body, Check::NotEmpty, "Name required"),
        Rule::new("price", Location::Body, Check::IsNumeric, "Enter a valid number"),
    ];

    fn app() -> Router {
        Router::new()
            .route("/items/{id}", with_rules(get(|| async { "reached" }), ID_RULES))
            .route("/items", with_rules(post(|| async { "reached" }), BODY_RULES))
            .layer(axum::middleware::from_fn(parse_json_body))
    }

    async fn call(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_param_reaches_handler() {
        let request = Request::builder().uri("/items/42").body(Body::empty()).unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"reached");
    }

    #[tokio::test]
    async fn test_invalid_param_blocks_handler() {
        let request = Request::builder().uri("/items/abc").body(Body::empty()).unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({"errors": [{
                "type": "field",
                "value": "abc",
                "msg": "Invalid ID",
                "path": "id",
                "location": "params"
            }]})
        );
    }

    #[tokio::test]
    async fn test_body_rules_report_every_failure() {
        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"","price":"abc"}"#))
            .unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(&body).unwrap();
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0]["msg"], "Name required");
        assert_eq!(errors[1]["msg"], "Enter a valid number");
    }

    #[tokio::test]
    async fn test_valid_body_reaches_handler() {
        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Monitor","price":300}"#))
            .unwrap();
        let (status, _) = call(request).await;
        assert_eq!(status, StatusCode::OK);
    }
}
