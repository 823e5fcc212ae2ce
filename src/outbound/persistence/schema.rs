//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// User records.
    ///
    /// Email carries no uniqueness constraint; dedup happens in the
    /// submission workflow with a lookup before insert.
    users (id) {
        /// Primary key, assigned by the store.
        id -> Int4,
        name -> Varchar,
        email -> Varchar,
        phone -> Varchar,
    }
}

diesel::table! {
    /// Address records, each owned by exactly one user.
    ///
    /// `user_id` cascades on user deletion, so removing a user removes its
    /// addresses without application code.
    addresses (id) {
        /// Primary key, assigned by the store.
        id -> Int4,
        address1 -> Varchar,
        address2 -> Nullable<Varchar>,
        city -> Varchar,
        state -> Varchar,
        zip -> Varchar,
        /// Owning user; required at persistence time.
        user_id -> Int4,
    }
}

diesel::joinable!(addresses -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(addresses, users);
