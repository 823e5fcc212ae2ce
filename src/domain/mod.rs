//! Domain entities, validation, and persistence ports.
//!
//! Purpose: Define strongly typed records shared by the HTTP and persistence
//! layers, the pure validation rules applied at the intake boundary, and the
//! repository port the persistence adapter implements. Keep types immutable
//! and document invariants and serialisation contracts (serde) in each type's
//! Rustdoc.
//!
//! Public surface:
//! - User / Address — persisted records and their nested read models.
//! - NewUser / NewAddress — validated, not-yet-persisted payloads.
//! - ErrorCode — stable error identifier mapped to HTTP statuses inbound.
//! - ports — the `ContactRepository` trait and its tagged error type.

pub mod address;
pub mod error;
pub mod ports;
pub mod user;
pub mod validation;

pub use self::address::{Address, AddressUpdate, AddressWithUser, NewAddress};
pub use self::error::ErrorCode;
pub use self::user::{NewUser, User, UserUpdate, UserWithAddresses};
pub use self::validation::{
    AddressPayload, FieldViolation, UserPayload, validate_address, validate_user,
};
