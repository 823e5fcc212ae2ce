//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::{Address, AddressUpdate, NewAddress, NewUser, User, UserUpdate};

use super::schema::{addresses, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
        }
    }
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            phone: &user.phone,
        }
    }
}

/// Changeset struct for the combined update's user statement.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

impl<'a> From<&'a UserUpdate> for UserChangeset<'a> {
    fn from(update: &'a UserUpdate) -> Self {
        Self {
            name: &update.name,
            email: &update.email,
            phone: &update.phone,
        }
    }
}

/// Row struct for reading from the addresses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = addresses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AddressRow {
    pub id: i32,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub user_id: i32,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            id: row.id,
            address1: row.address1,
            address2: row.address2,
            city: row.city,
            state: row.state,
            zip: row.zip,
            user_id: row.user_id,
        }
    }
}

/// Insertable struct for creating new address records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = addresses)]
pub(crate) struct NewAddressRow<'a> {
    pub address1: &'a str,
    pub address2: Option<&'a str>,
    pub city: &'a str,
    pub state: &'a str,
    pub zip: &'a str,
    pub user_id: i32,
}

impl<'a> NewAddressRow<'a> {
    /// Bind a validated address payload to its owning user.
    pub(crate) fn linked_to(address: &'a NewAddress, user_id: i32) -> Self {
        Self {
            address1: &address.address1,
            address2: address.address2.as_deref(),
            city: &address.city,
            state: &address.state,
            zip: &address.zip,
            user_id,
        }
    }
}

/// Changeset struct for the combined update's address statement.
///
/// `address2` is skipped when absent, leaving the stored value untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = addresses)]
pub(crate) struct AddressChangeset<'a> {
    pub address1: &'a str,
    pub address2: Option<&'a str>,
    pub city: &'a str,
    pub state: &'a str,
    pub zip: &'a str,
}

impl<'a> From<&'a AddressUpdate> for AddressChangeset<'a> {
    fn from(update: &'a AddressUpdate) -> Self {
        Self {
            address1: &update.address1,
            address2: update.address2.as_deref(),
            city: &update.city,
            state: &update.state,
            zip: &update.zip,
        }
    }
}
