//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Administered user accounts.
    users (id) {
        /// Primary key assigned by the `users_id_seq` sequence.
        id -> Int4,
        /// Display name shown in the admin table.
        name -> Varchar,
        /// Contact email address.
        email -> Varchar,
        /// Password text as submitted by the admin panel.
        password -> Varchar,
    }
}
