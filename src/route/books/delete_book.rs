use axum::extract::State;

use crate::{
    error::{ErrorVerbosityProvider, ResourceError},
    extractor::query::ApiQuery,
    server_error,
    state::ApiState,
};

use super::{BookErrorType, BookIdQuery, BookMessageResponse};

pub async fn delete_book(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<BookIdQuery>,
) -> Result<BookMessageResponse, ResourceError<BookErrorType>> {
    let verbosity = state.error_verbosity();
    let id = query.require(verbosity)?;

    let book = state
        .store()
        .delete(id)
        .await
        .map_err(server_error!(state))?
        .ok_or_else(|| ResourceError::new(verbosity, BookErrorType::not_found(id)))?;

    tracing::debug!(id, "Book deleted");

    Ok(BookMessageResponse {
        message: String::from("Book deleted"),
        book,
    })
}
