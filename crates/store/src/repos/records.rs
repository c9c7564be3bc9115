//! Record repository trait.

use crate::error::StoreResult;
use crate::models::RecordRow;
use async_trait::async_trait;

/// Repository for the `information` table.
///
/// Names are matched case-insensitively (`LOWER(name) = LOWER($1)`). Names are
/// not unique, so mutations apply to every matching row and report how many
/// rows they touched.
#[async_trait]
pub trait RecordRepo: Send + Sync {
    /// Whether at least one row has the given name.
    async fn record_exists(&self, name: &str) -> StoreResult<bool>;

    /// All rows, in the order the database returns them.
    async fn list_records(&self) -> StoreResult<Vec<RecordRow>>;

    /// Insert a row. Duplicate names are accepted.
    async fn insert_record(&self, record: &RecordRow) -> StoreResult<()>;

    /// Overwrite every row named `old_name` with `record`.
    /// Returns the number of rows updated.
    async fn update_records_by_name(&self, old_name: &str, record: &RecordRow)
    -> StoreResult<u64>;

    /// Delete every row named `name`. Returns the number of rows deleted.
    async fn delete_records_by_name(&self, name: &str) -> StoreResult<u64>;
}
