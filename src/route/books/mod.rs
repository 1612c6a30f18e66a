use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::{ErrorVerbosity, ResourceError, ResourceErrorProvider},
    types::book::{Book, BookId},
};

pub mod app;
pub mod book_options;
pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod update_book;

/// Methods served on `/book`.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";

/// The `?id=` query parameter. An empty value counts as missing.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct BookIdQuery {
    #[serde(default, deserialize_with = "non_empty")]
    pub id: Option<String>,
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<String>::deserialize(deserializer)?;

    Ok(id.filter(|id| !id.is_empty()))
}

/// What the `id` query parameter refers to.
#[derive(Debug, PartialEq, Eq)]
pub enum BookIdParam {
    Missing,
    Id(BookId),
    /// A value no stored book can have, e.g. `abc` or out of range.
    Unknown(String),
}

impl BookIdQuery {
    pub fn param(&self) -> BookIdParam {
        match self.id.as_deref() {
            None => BookIdParam::Missing,
            Some(raw) => raw
                .parse::<BookId>()
                .map(BookIdParam::Id)
                .unwrap_or_else(|_| BookIdParam::Unknown(raw.to_string())),
        }
    }

    /// Returns the id, a missing or unknown id is a not found error.
    pub fn require(
        &self,
        verbosity: ErrorVerbosity,
    ) -> Result<BookId, ResourceError<BookErrorType>> {
        match self.param() {
            BookIdParam::Id(id) => Ok(id),
            BookIdParam::Missing => Err(ResourceError::new(verbosity, BookErrorType::MissingId)),
            BookIdParam::Unknown(id) => Err(ResourceError::new(
                verbosity,
                BookErrorType::NotFound { id },
            )),
        }
    }
}

/// Confirms a change to a book.
#[derive(Debug, Serialize)]
pub struct BookMessageResponse {
    pub message: String,
    pub book: Book,
}

impl IntoResponse for BookMessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "error_type")]
pub enum BookErrorType {
    MissingId,
    NotFound {
        #[serde(skip)]
        id: String,
    },
}

impl BookErrorType {
    pub fn not_found(id: BookId) -> Self {
        BookErrorType::NotFound { id: id.to_string() }
    }
}

#[derive(Debug, Serialize)]
pub struct BookErrorContext {
    pub reason: String,
}

impl ResourceErrorProvider for BookErrorType {
    type Context = BookErrorContext;

    fn headers(&self) -> Option<HeaderMap> {
        None
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }

    fn message(&self) -> &'static str {
        "Book not found"
    }

    fn context(&self) -> Self::Context {
        match self {
            BookErrorType::MissingId => BookErrorContext {
                reason: String::from("The `id` query parameter is required"),
            },
            BookErrorType::NotFound { id } => BookErrorContext {
                reason: format!("Book with id {id} not found"),
            },
        }
    }
}
