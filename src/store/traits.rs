use crate::model::TableData;
use anyhow::Result;

/// Read access to a tabular backend that hands out whole tables.
#[async_trait::async_trait]
pub trait TableStore: Send + Sync {
    /// Get a table by name. An absent table reads as `TableData::empty()`.
    async fn get_table(&self, name: &str) -> Result<TableData>;
    /// Names of all tables, sorted
    async fn list_tables(&self) -> Result<Vec<String>>;
}

