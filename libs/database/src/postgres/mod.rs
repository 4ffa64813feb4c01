//! PostgreSQL connector and utilities
//!
//! Provides pool construction, migration running, and health checks.

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{connect_lazy, run_migrations, sync_schema};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
