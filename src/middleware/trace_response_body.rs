use axum::{
    body::Body,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;

use crate::{
    error::{ApiError, ErrorVerbosityProvider, InternalServerError},
    state::ApiState,
};

/// Middleware to trace JSON response bodies.
///
/// Buffers the whole response body, but only while `TRACE` is enabled.
pub async fn trace_response_body(
    State(state): State<ApiState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let res = next.run(req).await;

    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));

    if !is_json || !tracing::enabled!(tracing::Level::TRACE) {
        return Ok(res);
    }

    let (parts, body) = res.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|err| InternalServerError::from_generic_error(state.error_verbosity(), err))?
        .to_bytes();

    if let Ok(body) = std::str::from_utf8(&bytes) {
        tracing::trace!(status = %parts.status, len = bytes.len(), %body, "Response body");
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
