//! Persistence plumbing shared by the domain crates.
//!
//! - [`postgres`]: SeaORM connection management, migrations and health checks
//! - [`common`]: the unified [`DatabaseError`] and connection retry with backoff
//! - [`ids`]: identifier generation for new entities
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use core_config::FromEnv;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "blog_api").await?;
//! ```

pub mod common;
pub mod ids;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
pub use ids::{IdGenerator, SequenceIdGenerator, UuidV7Generator};
