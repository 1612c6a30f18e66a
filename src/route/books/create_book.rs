use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::ApiError,
    extractor::{json::ApiJson, validated::Validated},
    server_error,
    state::ApiState,
    types::book::{Book, BookFields},
};

#[derive(Debug)]
pub struct CreateBookResponse {
    pub book: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.book)).into_response()
    }
}

pub async fn create_book(
    State(state): State<ApiState>,
    Validated(ApiJson(fields)): Validated<ApiJson<BookFields>>,
) -> Result<CreateBookResponse, ApiError> {
    let book = state
        .store()
        .insert(fields)
        .await
        .map_err(server_error!(state))?;

    tracing::debug!(id = book.id, "Book created");

    Ok(CreateBookResponse { book })
}
