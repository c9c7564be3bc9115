//! Relational store access for Roster.
//!
//! This crate owns every SQL statement the service issues:
//! - The `RecordRepo` operations over the `information` table
//! - PostgreSQL (production) and SQLite (tests, local runs) backends
//! - Pool construction from `DatabaseConfig`

pub mod error;
pub mod models;
pub mod postgres;
pub mod repos;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::RecordRow;
pub use postgres::PostgresStore;
pub use repos::RecordRepo;
pub use store::{RecordStore, SqliteStore};

use roster_core::config::{DatabaseBackend, DatabaseConfig};
use std::sync::Arc;

/// Create a record store from configuration.
pub async fn from_config(config: &DatabaseConfig) -> StoreResult<Arc<dyn RecordStore>> {
    config.validate().map_err(StoreError::Config)?;

    match config.backend() {
        DatabaseBackend::Sqlite(path) => {
            let store = SqliteStore::new(&path).await?;
            Ok(Arc::new(store) as Arc<dyn RecordStore>)
        }
        DatabaseBackend::Postgres => {
            let store = if let Some(url) = &config.url {
                tracing::info!("Connecting to PostgreSQL using connection URL");
                PostgresStore::from_url(url, config).await?
            } else if let (Some(host), Some(database)) =
                (config.host.as_ref(), config.database.as_ref())
            {
                PostgresStore::from_params(host, database, config).await?
            } else {
                return Err(StoreError::Config(
                    "postgres config requires either 'url' or 'host' + 'database'".to_string(),
                ));
            };
            Ok(Arc::new(store) as Arc<dyn RecordStore>)
        }
    }
}
