//! Database models mapping to the `information` table.

use roster_core::Record;
use serde::Serialize;
use sqlx::FromRow;

/// One row of the `information` table, as stored.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct RecordRow {
    pub name: String,
    pub city: String,
    pub address: String,
    pub state: String,
}

impl From<Record> for RecordRow {
    fn from(record: Record) -> Self {
        Self {
            name: record.name,
            city: record.city,
            address: record.address,
            state: record.state,
        }
    }
}
