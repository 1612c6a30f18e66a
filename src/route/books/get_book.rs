use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::{ErrorVerbosityProvider, ResourceError},
    extractor::query::ApiQuery,
    server_error,
    state::ApiState,
    types::book::Book,
};

use super::{BookErrorType, BookIdParam, BookIdQuery};

#[derive(Debug)]
pub enum GetBookResponse {
    One(Book),
    All(Vec<Book>),
}

impl IntoResponse for GetBookResponse {
    fn into_response(self) -> Response {
        match self {
            GetBookResponse::One(book) => (StatusCode::OK, Json(book)).into_response(),
            GetBookResponse::All(books) => (StatusCode::OK, Json(books)).into_response(),
        }
    }
}

/// Returns the book with the given id, or all books if no id is given.
pub async fn get_book(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<BookIdQuery>,
) -> Result<GetBookResponse, ResourceError<BookErrorType>> {
    let id = match query.param() {
        BookIdParam::Id(id) => id,
        BookIdParam::Missing => {
            let books = state.store().all().await.map_err(server_error!(state))?;

            return Ok(GetBookResponse::All(books));
        }
        BookIdParam::Unknown(id) => {
            return Err(ResourceError::new(
                state.error_verbosity(),
                BookErrorType::NotFound { id },
            ))
        }
    };

    let book = state
        .store()
        .get(id)
        .await
        .map_err(server_error!(state))?
        .ok_or_else(|| {
            ResourceError::new(state.error_verbosity(), BookErrorType::not_found(id))
        })?;

    Ok(GetBookResponse::One(book))
}
