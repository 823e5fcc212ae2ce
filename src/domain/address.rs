//! Address records.
//!
//! An address always belongs to exactly one user; it cannot exist
//! standalone. The store enforces this with a required foreign key and
//! removes addresses when their owning user is deleted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::User;

/// Persisted address record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: i32,
    pub address1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
}

/// An address payload that passed validation but is not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Replacement field values for an existing address.
///
/// A `None` line two leaves the stored value untouched, matching the
/// optional-field semantics of the intake contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressUpdate {
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// An address together with the user that owns it.
///
/// Serialises flat, with the owner under a `user` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddressWithUser {
    #[serde(flatten)]
    pub address: Address,
    pub user: User,
}
