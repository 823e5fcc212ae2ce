//! User records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::address::Address;

/// Persisted user record.
///
/// The identifier is assigned by the store. The email acts as the natural
/// dedup key for the submission workflow; uniqueness is checked with a
/// lookup before insert rather than a database constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A user payload that passed validation but is not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Replacement field values for an existing user.
///
/// Every field is assigned on update; the combined update endpoint applies
/// no field validation, matching the intake contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A user together with the addresses linked to it.
///
/// Serialises flat, with the linked rows under an `address` key:
/// `{"id":1,"name":"Jane Doe",...,"address":[{...}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserWithAddresses {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "address")]
    pub addresses: Vec<Address>,
}
