//! HTTP adapter: handlers, typed DTOs, and the error envelope.

pub mod error;
pub mod health;
pub mod state;
pub mod submission;
pub mod users;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{ApiError, ApiResult};
