//! Record store trait and the SQLite implementation.

use crate::error::StoreResult;
use crate::models::RecordRow;
use crate::repos::RecordRepo;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Table bootstrap shared by both backends (embedded).
pub(crate) const SCHEMA: &str = include_str!("schema.sql");

/// Split the schema into individual statements, skipping comment-only chunks.
/// Prepared statements accept one statement at a time.
pub(crate) fn schema_statements(schema: &str) -> Vec<&str> {
    schema
        .split(';')
        .filter_map(|statement| {
            let trimmed = statement.trim();
            if trimmed.is_empty() {
                return None;
            }
            let has_sql = trimmed.lines().any(|line| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with("--")
            });
            has_sql.then_some(trimmed)
        })
        .collect()
}

/// Combined store trait.
#[async_trait]
pub trait RecordStore: RecordRepo + Send + Sync {
    /// Create the `information` table and its index if they are missing.
    async fn ensure_schema(&self) -> StoreResult<()>;

    /// Check database connectivity and health.
    async fn health_check(&self) -> StoreResult<()>;
}

/// SQLite-based record store.
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Open (creating if needed) a SQLite database at `path`.
    /// `:memory:` gives a private in-memory database.
    pub async fn new(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        // One connection: SQLite serializes writers anyway, and an in-memory
        // database only lives as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;

        tracing::info!(path = %path.display(), "SQLite record store ready");

        Ok(store)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
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
impl RecordRepo for SqliteStore {
    async fn record_exists(&self, name: &str) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM information WHERE LOWER(name) = LOWER(?))",
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
        sqlx::query("INSERT INTO information (name, city, address, state) VALUES (?, ?, ?, ?)")
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
            "UPDATE information SET name = ?, city = ?, address = ?, state = ? WHERE LOWER(name) = LOWER(?)",
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
        let result = sqlx::query("DELETE FROM information WHERE LOWER(name) = LOWER(?)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
