use axum::extract::State;
use validator::Validate;

use crate::{
    error::{ApiError, ErrorVerbosityProvider, ResourceError, ValidationError},
    extractor::{json::ApiJson, query::ApiQuery, validated::Validated},
    server_error,
    state::ApiState,
    types::book::{BookFields, BookPatch},
};

use super::{BookErrorType, BookIdQuery, BookMessageResponse};

/// Replaces all fields of an existing book. Never creates a book.
pub async fn replace_book(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<BookIdQuery>,
    Validated(ApiJson(fields)): Validated<ApiJson<BookFields>>,
) -> Result<BookMessageResponse, ResourceError<BookErrorType>> {
    let verbosity = state.error_verbosity();
    let id = query.require(verbosity)?;

    let book = state
        .store()
        .update(id, fields)
        .await
        .map_err(server_error!(state))?
        .ok_or_else(|| ResourceError::new(verbosity, BookErrorType::not_found(id)))?;

    tracing::debug!(id, "Book replaced");

    Ok(BookMessageResponse {
        message: String::from("Book updated"),
        book,
    })
}

/// Merges the given fields over an existing book.
pub async fn patch_book(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<BookIdQuery>,
    ApiJson(patch): ApiJson<BookPatch>,
) -> Result<BookMessageResponse, ResourceError<BookErrorType>> {
    let verbosity = state.error_verbosity();
    let id = query.require(verbosity)?;

    let current = state
        .store()
        .get(id)
        .await
        .map_err(server_error!(state))?
        .ok_or_else(|| ResourceError::new(verbosity, BookErrorType::not_found(id)))?;

    let fields = current.patched(patch);
    fields.validate().map_err(|errors| {
        tracing::warn!(?errors, "Validation errors");

        ApiError::from(ValidationError::from_validation_errors(verbosity, errors))
    })?;

    // The book may have been deleted since it was read.
    let book = state
        .store()
        .update(id, fields)
        .await
        .map_err(server_error!(state))?
        .ok_or_else(|| ResourceError::new(verbosity, BookErrorType::not_found(id)))?;

    tracing::debug!(id, "Book patched");

    Ok(BookMessageResponse {
        message: String::from("Book updated"),
        book,
    })
}
