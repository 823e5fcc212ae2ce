//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.
//!
//! The adapter maps pool and Diesel failures into the domain's tagged
//! [`RepositoryError`] variants. The create-with-nested-address and combined
//! update operations run inside a single transaction; everything else is a
//! single statement.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{ContactRepository, RepositoryError};
use crate::domain::{
    Address, AddressUpdate, AddressWithUser, NewAddress, NewUser, User, UserUpdate,
    UserWithAddresses,
};

use super::models::{
    AddressChangeset, AddressRow, NewAddressRow, NewUserRow, UserChangeset, UserRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{addresses, users};

/// Diesel-backed implementation of the `ContactRepository` port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => RepositoryError::not_found("record"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RepositoryError::conflict(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) => RepositoryError::query(info.message().to_owned()),
        other => RepositoryError::query(other.to_string()),
    }
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }

    async fn create_user_with_address(
        &self,
        user: NewUser,
        address: NewAddress,
    ) -> Result<UserWithAddresses, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let (user_row, address_row) = conn
            .transaction(|conn| {
                async move {
                    let user_row: UserRow = diesel::insert_into(users::table)
                        .values(NewUserRow::from(&user))
                        .returning(UserRow::as_returning())
                        .get_result(conn)
                        .await?;

                    let address_row: AddressRow = diesel::insert_into(addresses::table)
                        .values(NewAddressRow::linked_to(&address, user_row.id))
                        .returning(AddressRow::as_returning())
                        .get_result(conn)
                        .await?;

                    Ok::<_, diesel::result::Error>((user_row, address_row))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(UserWithAddresses {
            user: user_row.into(),
            addresses: vec![address_row.into()],
        })
    }

    async fn create_address_for_user(
        &self,
        address: NewAddress,
        user_id: i32,
    ) -> Result<AddressWithUser, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let address_row: AddressRow = diesel::insert_into(addresses::table)
            .values(NewAddressRow::linked_to(&address, user_id))
            .returning(AddressRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let user_row: UserRow = users::table
            .find(address_row.user_id)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(AddressWithUser {
            address: address_row.into(),
            user: user_row.into(),
        })
    }

    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_user_by_id(&self, id: i32) -> Result<Option<UserWithAddresses>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let user_row: Option<UserRow> = users::table
            .find(id)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(user_row) = user_row else {
            return Ok(None);
        };

        let address_rows: Vec<AddressRow> = addresses::table
            .filter(addresses::user_id.eq(id))
            .select(AddressRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(UserWithAddresses {
            user: user_row.into(),
            addresses: address_rows.into_iter().map(Address::from).collect(),
        }))
    }

    async fn delete_user_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Addresses are removed by the schema's ON DELETE CASCADE.
        let deleted = diesel::delete(users::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(RepositoryError::not_found("user"));
        }
        Ok(())
    }

    async fn update_user_and_address(
        &self,
        user: UserUpdate,
        address: AddressUpdate,
        user_id: i32,
        address_id: i32,
    ) -> Result<(User, Address), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Both statements share one transaction; a missing target aborts
        // with NotFound and rolls the other statement back.
        let (user_row, address_row) = conn
            .transaction(|conn| {
                async move {
                    let user_row: UserRow = diesel::update(users::table.find(user_id))
                        .set(UserChangeset::from(&user))
                        .returning(UserRow::as_returning())
                        .get_result(conn)
                        .await?;

                    let address_row: AddressRow =
                        diesel::update(addresses::table.find(address_id))
                            .set(AddressChangeset::from(&address))
                            .returning(AddressRow::as_returning())
                            .get_result(conn)
                            .await?;

                    Ok::<_, diesel::result::Error>((user_row, address_row))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok((user_row.into(), address_row.into()))
    }
}
