//! Shared fixtures for HTTP handler tests.
//!
//! Handlers are exercised against an in-memory [`ContactRepository`] so the
//! tests cover routing, validation, and envelope shape without a database.

use std::sync::{Arc, Mutex};

use actix_web::App;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use async_trait::async_trait;

use crate::domain::ports::{ContactRepository, RepositoryError};
use crate::domain::{
    Address, AddressUpdate, AddressWithUser, NewAddress, NewUser, User, UserUpdate,
    UserWithAddresses,
};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::server::build_app;

#[derive(Default)]
struct Store {
    users: Vec<User>,
    addresses: Vec<Address>,
    next_user_id: i32,
    next_address_id: i32,
}

impl Store {
    fn insert_user(&mut self, user: NewUser) -> User {
        self.next_user_id += 1;
        let user = User {
            id: self.next_user_id,
            name: user.name,
            email: user.email,
            phone: user.phone,
        };
        self.users.push(user.clone());
        user
    }

    fn insert_address(&mut self, address: NewAddress, user_id: i32) -> Address {
        self.next_address_id += 1;
        let address = Address {
            id: self.next_address_id,
            address1: address.address1,
            address2: address.address2,
            city: address.city,
            state: address.state,
            zip: address.zip,
            user_id,
        };
        self.addresses.push(address.clone());
        address
    }

    fn addresses_of(&self, user_id: i32) -> Vec<Address> {
        self.addresses
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect()
    }
}

/// In-memory repository mirroring the adapter's observable behaviour,
/// including cascading deletes and all-or-nothing combined updates.
#[derive(Default)]
pub(crate) struct InMemoryContactRepository {
    store: Mutex<Store>,
}

fn lock_poisoned() -> RepositoryError {
    RepositoryError::connection("store lock poisoned")
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let store = self.store.lock().map_err(|_| lock_poisoned())?;
        Ok(store.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user_with_address(
        &self,
        user: NewUser,
        address: NewAddress,
    ) -> Result<UserWithAddresses, RepositoryError> {
        let mut store = self.store.lock().map_err(|_| lock_poisoned())?;
        let user = store.insert_user(user);
        let address = store.insert_address(address, user.id);
        Ok(UserWithAddresses {
            user,
            addresses: vec![address],
        })
    }

    async fn create_address_for_user(
        &self,
        address: NewAddress,
        user_id: i32,
    ) -> Result<AddressWithUser, RepositoryError> {
        let mut store = self.store.lock().map_err(|_| lock_poisoned())?;
        let Some(user) = store.users.iter().find(|u| u.id == user_id).cloned() else {
            return Err(RepositoryError::not_found("user"));
        };
        let address = store.insert_address(address, user_id);
        Ok(AddressWithUser { address, user })
    }

    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        let store = self.store.lock().map_err(|_| lock_poisoned())?;
        Ok(store.users.clone())
    }

    async fn get_user_by_id(&self, id: i32) -> Result<Option<UserWithAddresses>, RepositoryError> {
        let store = self.store.lock().map_err(|_| lock_poisoned())?;
        Ok(store.users.iter().find(|u| u.id == id).cloned().map(|user| {
            let addresses = store.addresses_of(user.id);
            UserWithAddresses { user, addresses }
        }))
    }

    async fn delete_user_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().map_err(|_| lock_poisoned())?;
        let before = store.users.len();
        store.users.retain(|u| u.id != id);
        if store.users.len() == before {
            return Err(RepositoryError::not_found("user"));
        }
        // Mirror the store's ON DELETE CASCADE.
        store.addresses.retain(|a| a.user_id != id);
        Ok(())
    }

    async fn update_user_and_address(
        &self,
        user: UserUpdate,
        address: AddressUpdate,
        user_id: i32,
        address_id: i32,
    ) -> Result<(User, Address), RepositoryError> {
        let mut store = self.store.lock().map_err(|_| lock_poisoned())?;

        // Locate both targets before mutating anything so a missing row
        // leaves the other untouched, as the transactional adapter does.
        let user_index = store.users.iter().position(|u| u.id == user_id);
        let address_index = store.addresses.iter().position(|a| a.id == address_id);
        let (Some(user_index), Some(address_index)) = (user_index, address_index) else {
            return Err(RepositoryError::not_found("record"));
        };

        let stored_user = &mut store.users[user_index];
        stored_user.name = user.name;
        stored_user.email = user.email;
        stored_user.phone = user.phone;
        let updated_user = stored_user.clone();

        let stored_address = &mut store.addresses[address_index];
        stored_address.address1 = address.address1;
        if let Some(line_two) = address.address2 {
            stored_address.address2 = Some(line_two);
        }
        stored_address.city = address.city;
        stored_address.state = address.state;
        stored_address.zip = address.zip;
        let updated_address = stored_address.clone();

        Ok((updated_user, updated_address))
    }
}

/// Repository double whose every operation fails with a query error.
pub(crate) struct FailingContactRepository;

fn query_fault() -> RepositoryError {
    RepositoryError::query("connection reset by peer")
}

#[async_trait]
impl ContactRepository for FailingContactRepository {
    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
        Err(query_fault())
    }

    async fn create_user_with_address(
        &self,
        _user: NewUser,
        _address: NewAddress,
    ) -> Result<UserWithAddresses, RepositoryError> {
        Err(query_fault())
    }

    async fn create_address_for_user(
        &self,
        _address: NewAddress,
        _user_id: i32,
    ) -> Result<AddressWithUser, RepositoryError> {
        Err(query_fault())
    }

    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        Err(query_fault())
    }

    async fn get_user_by_id(&self, _id: i32) -> Result<Option<UserWithAddresses>, RepositoryError> {
        Err(query_fault())
    }

    async fn delete_user_by_id(&self, _id: i32) -> Result<(), RepositoryError> {
        Err(query_fault())
    }

    async fn update_user_and_address(
        &self,
        _user: UserUpdate,
        _address: AddressUpdate,
        _user_id: i32,
        _address_id: i32,
    ) -> Result<(User, Address), RepositoryError> {
        Err(query_fault())
    }
}

/// App over an empty in-memory store.
pub(crate) fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with(InMemoryContactRepository::default())
}

/// App over the given repository implementation.
pub(crate) fn test_app_with(
    repository: impl ContactRepository + 'static,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = actix_web::web::Data::new(HealthState::new());
    health.mark_ready();
    build_app(HttpState::new(Arc::new(repository)), health)
}

/// App over a store seeded with one user (id 1) owning one address (id 1).
pub(crate) fn seeded_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let repository = InMemoryContactRepository::default();
    {
        let mut store = repository.store.lock().expect("fresh store lock");
        let user = store.insert_user(NewUser {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "9876543210".into(),
        });
        store.insert_address(
            NewAddress {
                address1: "1 Main St".into(),
                address2: None,
                city: "Pune".into(),
                state: "MH".into(),
                zip: "411001".into(),
            },
            user.id,
        );
    }
    test_app_with(repository)
}
