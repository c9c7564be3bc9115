//! PostgreSQL-based record store implementation.

use crate::error::StoreResult;
use crate::models::RecordRow;
use crate::repos::RecordRepo;
use crate::store::{RecordStore, SCHEMA, schema_statements};
use async_trait::async_trait;
use roster_core::config::{DatabaseConfig, PgSslMode};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode as SqlxPgSslMode};
use sqlx::{Pool, Postgres};
use std::str::FromStr;
use std::time::Duration;

/// PostgreSQL-based record store.
pub struct PostgresStore {
    pool: Pool<Postgres>,
}

impl PostgresStore {
    /// Create a new PostgreSQL store from a connection URL.
    ///
    /// Pool sizing and timeouts come from `config`; its connection fields
    /// are ignored. An `sslmode` in the URL wins over `config.ssl_mode`.
    pub async fn from_url(url: &str, config: &DatabaseConfig) -> StoreResult<Self> {
        let mut opts = PgConnectOptions::from_str(url)?;
        if !url.contains("sslmode=") {
            opts = opts.ssl_mode(to_sqlx_ssl_mode(config.ssl_mode));
        }
        Self::connect(opts, config).await
    }

    /// Create a new PostgreSQL store from individual connection parameters.
    ///
    /// This allows credentials to be passed separately (e.g., the password via
    /// ROSTER_DATABASE__PASSWORD).
    pub async fn from_params(
        host: &str,
        database: &str,
        config: &DatabaseConfig,
    ) -> StoreResult<Self> {
        let port = config.port.unwrap_or(5432);
        let mut opts = PgConnectOptions::new()
            .host(host)
            .port(port)
            .database(database)
            .ssl_mode(to_sqlx_ssl_mode(config.ssl_mode));

        if let Some(user) = &config.username {
            opts = opts.username(user);
        }

        if let Some(pass) = &config.password {
            opts = opts.password(pass);
        }

        // Log connection info without password
        tracing::info!(
            host = host,
            port = port,
            database = database,
            username = config.username.as_deref().unwrap_or("<none>"),
            ssl_mode = ?config.ssl_mode,
            "Connecting to PostgreSQL with individual parameters"
        );

        Self::connect(opts, config).await
    }

    async fn connect(mut opts: PgConnectOptions, config: &DatabaseConfig) -> StoreResult<Self> {
        if let Some(timeout_ms) = config.statement_timeout_ms {
            opts = opts.options([("statement_timeout", format!("{}ms", timeout_ms))]);
            tracing::info!("PostgreSQL statement_timeout set to {}ms", timeout_ms);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;

        tracing::info!(
            max_connections = config.max_connections,
            "PostgreSQL record store ready"
        );

        Ok(store)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}

fn to_sqlx_ssl_mode(mode: PgSslMode) -> SqlxPgSslMode {
    match mode {
        PgSslMode::Disable => SqlxPgSslMode::Disable,
        PgSslMode::Prefer => SqlxPgSslMode::Prefer,
        PgSslMode::Require => SqlxPgSslMode::Require,
    }
}

#[async_trait]
impl RecordStore for PostgresStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        for statement in schema_statements(SCHEMA) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordRepo for PostgresStore {
    async fn record_exists(&self, name: &str) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM information WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn list_records(&self) -> StoreResult<Vec<RecordRow>> {
        let rows =
            sqlx::query_as::<_, RecordRow>("SELECT name, city, address, state FROM information")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn insert_record(&self, record: &RecordRow) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO information (name, city, address, state) VALUES ($1, $2, $3, $4)",
        )
        .bind(&record.name)
        .bind(&record.city)
        .bind(&record.address)
        .bind(&record.state)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_records_by_name(
        &self,
        old_name: &str,
        record: &RecordRow,
    ) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE information
            SET name = $1, city = $2, address = $3, state = $4
            WHERE LOWER(name) = LOWER($5)
            "#,
        )
        .bind(&record.name)
        .bind(&record.city)
        .bind(&record.address)
        .bind(&record.state)
        .bind(old_name)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_records_by_name(&self, name: &str) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM information WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
