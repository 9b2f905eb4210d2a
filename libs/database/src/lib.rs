//! PostgreSQL connectivity for the catalog services.
//!
//! Provides pool configuration from the environment, connection with retry,
//! migration running and a readiness probe.
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::{postgres, retry::RetryPolicy};
//! use migration::Migrator;
//!
//! let config = postgres::PostgresConfig::from_env()?;
//! let db = postgres::connect_with_retry(config, &RetryPolicy::default()).await?;
//! postgres::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! ```

pub mod error;
pub mod postgres;
pub mod retry;

pub use error::DatabaseError;
