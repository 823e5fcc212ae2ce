//! HTTP error envelope and the central mapping from domain failures.
//!
//! Keep the domain free of transport concerns by translating tagged
//! [`RepositoryError`] variants and validation violations into Actix
//! responses here. Every error response carries the intake envelope:
//! `{"state":"error","code":...,"msg":...}` with optional field detail.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::RepositoryError;
use crate::domain::{ErrorCode, FieldViolation};

/// Standard error envelope returned by HTTP handlers.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    /// Terminal state label; always `error` for failures.
    #[schema(example = "error")]
    state: &'static str,
    /// Stable machine-readable failure category.
    code: ErrorCode,
    /// Human-readable message.
    #[serde(rename = "msg")]
    #[schema(example = "Validation error! Please check the data entered")]
    message: String,
    /// Per-field violation detail, present on validation failures only.
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Value>,
}

impl ApiError {
    /// Construct an error envelope for the given category.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            state: "error",
            code,
            message: message.into(),
            errors: None,
        }
    }

    /// Envelope for a failed payload validation.
    ///
    /// Only payloads that actually failed appear under `errors`, so a valid
    /// address alongside a broken user yields a `userData` key alone.
    pub fn validation(
        user_violations: Vec<FieldViolation>,
        address_violations: Vec<FieldViolation>,
    ) -> Self {
        let mut detail = Map::new();
        if !user_violations.is_empty() {
            detail.insert("userData".into(), json!(user_violations));
        }
        if !address_violations.is_empty() {
            detail.insert("addressData".into(), json!(address_violations));
        }

        let mut envelope = Self::new(
            ErrorCode::InvalidRequest,
            "Validation error! Please check the data entered",
        );
        envelope.errors = Some(Value::Object(detail));
        envelope
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    fn to_status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        error!(error = %err, "repository operation failed");
        match err {
            RepositoryError::NotFound { entity } => {
                Self::new(ErrorCode::NotFound, format!("{entity} not found"))
            }
            RepositoryError::Conflict { message } => {
                Self::new(ErrorCode::Conflict, format!("DB/Server error: {message}"))
            }
            RepositoryError::Connection { message } | RepositoryError::Query { message } => {
                Self::new(
                    ErrorCode::InternalError,
                    format!("DB/Server error: {message}"),
                )
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
