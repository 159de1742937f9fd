//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are built on `diesel-async` with `bb8` pooling. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module; only domain types cross the boundary.
//!
//! # Example
//!
//! ```no_run
//! use admin_backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), admin_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
