use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::IntoResponse,
};

use crate::error::{ApiError, ErrorVerbosityProvider, MethodNotAllowedError};

/// Middleware to map axum's `MethodNotAllowed` rejection to our [`ApiError`].
///
/// The `Allow` header of the rejection is kept.
pub async fn method_not_allowed<S: ErrorVerbosityProvider>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let resp = next.run(req).await;

    match resp.status() {
        StatusCode::METHOD_NOT_ALLOWED => {
            let allow = resp.headers().get(header::ALLOW).cloned();

            Err(MethodNotAllowedError::new(state.error_verbosity())
                .with_allow(allow)
                .into())
        }
        _ => Ok(resp),
    }
}
