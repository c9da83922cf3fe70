//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for authors, oppositions and phrases using SQLx.
//!
//! # Architecture
//!
//! - [`repositories`] hold the SQL and map rows with `sqlx::FromRow`
//! - [`adapters`] implement the domain ports on top of the repositories
//! - [`pool`] builds the connection pool and applies the embedded migrations
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresAuthorAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/oppositions")).await?;
//! run_migrations(&pool).await?;
//! let authors = PostgresAuthorAdapter::new(pool.clone());
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;

pub use adapters::{PostgresAuthorAdapter, PostgresOppositionAdapter};
pub use error::DatabaseError;
pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
