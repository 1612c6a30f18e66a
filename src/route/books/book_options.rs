use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

use super::ALLOWED_METHODS;

pub async fn book_options() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ALLOW, ALLOWED_METHODS),
            (header::CONTENT_TYPE, "application/json"),
        ],
    )
}
