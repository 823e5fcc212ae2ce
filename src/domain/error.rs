//! Transport-agnostic error categories.
//!
//! The domain reports failures through stable codes; the inbound HTTP layer
//! owns the mapping from codes to status lines and response envelopes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The targeted record does not exist.
    NotFound,
    /// The store rejected the operation because of a conflicting record.
    Conflict,
    /// An unexpected failure in the service or the underlying store.
    InternalError,
}
