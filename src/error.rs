use std::fmt::Debug;

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ErrorVerbosity {
    /// Server returns an empty response with [`StatusCode::NO_CONTENT`] for all errors.
    None,
    /// Server returns only the appropriate status code.
    StatusCode,
    /// Server returns only the message with the appropriate status code.
    Message,
    /// Server returns the message, the error type with cleared error content and the appropriate status code.
    Type,
    /// Server returns the message, the error type with the error content and the appropriate status code.
    #[default]
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

pub trait ErrorVerbosityProvider {
    /// Returns the error verbosity.
    fn error_verbosity(&self) -> ErrorVerbosity;
}

/// Maps any error into an [`ApiError::InternalServerError`] using the verbosity of the given state.
#[macro_export]
macro_rules! server_error {
    ($state:expr) => {
        |err| {
            $crate::error::ApiError::from($crate::error::InternalServerError::from_generic_error(
                $crate::error::ErrorVerbosityProvider::error_verbosity(&$state),
                err,
            ))
        }
    };
}

#[derive(Debug, Serialize)]
struct ApiErrorResponse {
    #[serde(flatten)]
    error: ApiError,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ApiErrorMessage {
    message: &'static str,
}

impl From<ApiErrorResponse> for ApiErrorMessage {
    fn from(response: ApiErrorResponse) -> Self {
        ApiErrorMessage {
            message: response.message,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let headers = self.error.headers();
        let status_code = self.error.status_code();

        match self.error.verbosity() {
            ErrorVerbosity::None => StatusCode::NO_CONTENT.into_response(),
            ErrorVerbosity::StatusCode => (status_code, headers).into_response(),
            ErrorVerbosity::Message => {
                (status_code, headers, Json(ApiErrorMessage::from(self))).into_response()
            }
            ErrorVerbosity::Type | ErrorVerbosity::Full => {
                (status_code, headers, Json(self)).into_response()
            }
        }
    }
}

#[derive(Debug, From, Serialize)]
#[serde(tag = "error_type", content = "error")]
/// API error
pub enum ApiError {
    /// Internal server error
    ///
    /// This error is returned when an internal server error occurs, e.g. the book store failed.
    InternalServerError(InternalServerError),
    /// Query error
    ///
    /// This error is returned when the query parameters are not as expected.
    Query(QueryError),
    /// Body error
    ///
    /// This error is returned when the body is not as expected.
    Body(BodyError),
    /// Validation error
    ///
    /// This error is returned when the body was parsed but its fields are invalid.
    Validation(ValidationError),
    /// Method not allowed
    ///
    /// This error is returned when the method is not allowed.
    MethodNotAllowed(MethodNotAllowedError),
    /// Not found error
    ///
    /// This error is returned when the requested resource is not found.
    NotFound(NotFoundError),
}

impl ApiError {
    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::InternalServerError(err) => err.verbosity,
            ApiError::Query(err) => err.verbosity,
            ApiError::Body(err) => err.verbosity,
            ApiError::Validation(err) => err.verbosity,
            ApiError::MethodNotAllowed(err) => err.verbosity,
            ApiError::NotFound(err) => err.verbosity,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::InternalServerError(_) => "An internal server error has occurred",
            ApiError::Query(_) => "Failed to parse query parameters",
            ApiError::Body(_) => "Failed to parse request body",
            ApiError::Validation(_) => "Request body is invalid",
            ApiError::MethodNotAllowed(_) => "Method not allowed",
            ApiError::NotFound(_) => "The requested resource was not found",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(err) => err.status_code(),
            ApiError::Query(err) => err.status_code(),
            ApiError::Body(err) => err.status_code(),
            ApiError::Validation(err) => err.status_code(),
            ApiError::MethodNotAllowed(err) => err.status_code(),
            ApiError::NotFound(err) => err.status_code(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let ApiError::MethodNotAllowed(MethodNotAllowedError {
            allow: Some(allow), ..
        }) = self
        {
            headers.insert(header::ALLOW, allow.clone());
        }

        headers
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        let message = match error.verbosity() {
            ErrorVerbosity::None => "",
            _ => error.message(),
        };

        ApiErrorResponse { error, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiErrorResponse::from(self).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct InternalServerError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    internal_server_error: Option<String>,
}

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(verbosity: ErrorVerbosity, err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        let internal_server_error = verbosity.should_generate_error_reason().then_some(err);

        InternalServerError {
            verbosity,
            internal_server_error,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Debug, Serialize)]
pub struct QueryError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    query_error_reason: Option<String>,
    query_expected_schema: Option<String>,
}

impl QueryError {
    pub fn new(
        verbosity: ErrorVerbosity,
        query_error_reason: String,
        query_expected_schema: String,
    ) -> Self {
        let (query_error_reason, query_expected_schema) =
            match verbosity.should_generate_error_reason() {
                true => (Some(query_error_reason), Some(query_expected_schema)),
                false => (None, None),
            };

        QueryError {
            verbosity,
            query_error_reason,
            query_expected_schema,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug, Serialize)]
pub struct BodyError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    body_error_reason: Option<String>,
    body_expected_schema: Option<String>,
}

impl BodyError {
    pub fn new(
        verbosity: ErrorVerbosity,
        body_error_reason: String,
        body_expected_schema: String,
    ) -> Self {
        let (body_error_reason, body_expected_schema) =
            match verbosity.should_generate_error_reason() {
                true => (Some(body_error_reason), Some(body_expected_schema)),
                false => (None, None),
            };

        BodyError {
            verbosity,
            body_error_reason,
            body_expected_schema,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug, Serialize)]
pub struct ValidationError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    validation_errors: Option<ValidationErrors>,
}

impl ValidationError {
    pub fn from_validation_errors(verbosity: ErrorVerbosity, errors: ValidationErrors) -> Self {
        let validation_errors = verbosity.should_generate_error_reason().then_some(errors);

        ValidationError {
            verbosity,
            validation_errors,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

#[derive(Debug, Serialize)]
pub struct MethodNotAllowedError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    #[serde(skip)]
    allow: Option<HeaderValue>,
}

impl MethodNotAllowedError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        MethodNotAllowedError {
            verbosity,
            allow: None,
        }
    }

    /// Carries the `Allow` header of the rejected route over to the error response.
    pub fn with_allow(mut self, allow: Option<HeaderValue>) -> Self {
        self.allow = allow;
        self
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::METHOD_NOT_ALLOWED
    }
}

#[derive(Debug, Serialize)]
pub struct NotFoundError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl NotFoundError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        NotFoundError { verbosity }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

/// Describes an error that is specific to a resource, e.g. a book that does not exist.
pub trait ResourceErrorProvider: Serialize {
    type Context: Serialize;

    fn headers(&self) -> Option<HeaderMap>;

    fn status_code(&self) -> StatusCode;

    fn message(&self) -> &'static str;

    fn context(&self) -> Self::Context;
}

#[derive(Debug, Serialize)]
struct ResourceErrorResponse<'a, T, C> {
    #[serde(flatten)]
    error_type: &'a T,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<C>,
}

/// Error returned by resource handlers.
///
/// Either a resource specific error or one of the generic [`ApiError`]s.
#[derive(Debug)]
pub enum ResourceError<T> {
    Resource {
        verbosity: ErrorVerbosity,
        error_type: T,
    },
    Api(ApiError),
}

impl<T> ResourceError<T> {
    pub fn new(verbosity: ErrorVerbosity, error_type: T) -> Self {
        ResourceError::Resource {
            verbosity,
            error_type,
        }
    }
}

impl<T> From<ApiError> for ResourceError<T> {
    fn from(error: ApiError) -> Self {
        ResourceError::Api(error)
    }
}

impl<T> IntoResponse for ResourceError<T>
where
    T: ResourceErrorProvider + Debug,
{
    fn into_response(self) -> Response {
        let (verbosity, error_type) = match self {
            ResourceError::Api(error) => return error.into_response(),
            ResourceError::Resource {
                verbosity,
                error_type,
            } => (verbosity, error_type),
        };

        tracing::debug!(?error_type, "Resource error");

        let status_code = error_type.status_code();
        let headers = error_type.headers().unwrap_or_default();
        let message = error_type.message();

        match verbosity {
            ErrorVerbosity::None => StatusCode::NO_CONTENT.into_response(),
            ErrorVerbosity::StatusCode => (status_code, headers).into_response(),
            ErrorVerbosity::Message => {
                (status_code, headers, Json(ApiErrorMessage { message })).into_response()
            }
            ErrorVerbosity::Type => {
                let body = ResourceErrorResponse::<T, T::Context> {
                    error_type: &error_type,
                    message,
                    error: None,
                };

                (status_code, headers, Json(body)).into_response()
            }
            ErrorVerbosity::Full => {
                let body = ResourceErrorResponse {
                    error_type: &error_type,
                    message,
                    error: Some(error_type.context()),
                };

                (status_code, headers, Json(body)).into_response()
            }
        }
    }
}
