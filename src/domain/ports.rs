//! Persistence port for the contact store.
//!
//! The port describes how the domain expects to interact with the relational
//! store. It exposes strongly typed errors so the adapter maps its failures
//! into predictable variants instead of returning an opaque message string.

use async_trait::async_trait;
use thiserror::Error;

use super::address::{Address, AddressUpdate, AddressWithUser, NewAddress};
use super::user::{NewUser, User, UserUpdate, UserWithAddresses};

/// Errors surfaced by the persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Database connectivity or pool checkout failures.
    #[error("storage connection failed: {message}")]
    Connection { message: String },
    /// The targeted record does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    /// The store rejected a write because of a conflicting record.
    #[error("conflicting record: {message}")]
    Conflict { message: String },
    /// Catch-all for query failures that bubble up from the adapter.
    #[error("storage operation failed: {message}")]
    Query { message: String },
}

impl RepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for missing records.
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Helper for conflicting writes.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Entity-level create/read/update/delete operations over users and their
/// addresses.
///
/// `create_user_with_address` and `update_user_and_address` are atomic; the
/// submission workflow's lookup-before-insert is explicitly not, so two
/// concurrent submissions with the same new email can both create a user.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Look a user up by its email, the submission workflow's dedup key.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Create a user and its first address in a single transaction.
    async fn create_user_with_address(
        &self,
        user: NewUser,
        address: NewAddress,
    ) -> Result<UserWithAddresses, RepositoryError>;

    /// Create an additional address linked to an existing user.
    async fn create_address_for_user(
        &self,
        address: NewAddress,
        user_id: i32,
    ) -> Result<AddressWithUser, RepositoryError>;

    /// Fetch every user. Unbounded; the intake contract has no pagination.
    async fn list_users(&self) -> Result<Vec<User>, RepositoryError>;

    /// Fetch a user with its linked addresses, or `None` when absent.
    async fn get_user_by_id(&self, id: i32) -> Result<Option<UserWithAddresses>, RepositoryError>;

    /// Delete a user; linked addresses are removed by the store's cascading
    /// referential action.
    async fn delete_user_by_id(&self, id: i32) -> Result<(), RepositoryError>;

    /// Update a user and an address in one all-or-nothing transaction.
    ///
    /// The address is located by its own identifier, not derived from the
    /// user. When either target row is missing, neither is updated.
    async fn update_user_and_address(
        &self,
        user: UserUpdate,
        address: AddressUpdate,
        user_id: i32,
        address_id: i32,
    ) -> Result<(User, Address), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn repository_errors_render_their_context() {
        assert_eq!(
            RepositoryError::connection("connection refused").to_string(),
            "storage connection failed: connection refused"
        );
        assert_eq!(
            RepositoryError::not_found("user").to_string(),
            "user not found"
        );
        assert_eq!(
            RepositoryError::conflict("duplicate key").to_string(),
            "conflicting record: duplicate key"
        );
        assert_eq!(
            RepositoryError::query("relation missing").to_string(),
            "storage operation failed: relation missing"
        );
    }
}
