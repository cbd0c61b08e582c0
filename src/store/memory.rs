use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;

use crate::model::TableData;
use crate::store::traits::TableStore;

/// Tables held in memory, keyed by name
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, TableData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a table
    pub fn put_table(&self, name: impl Into<String>, table: TableData) {
        self.tables.write().insert(name.into(), table);
    }

    pub fn remove_table(&self, name: &str) -> bool {
        self.tables.write().remove(name).is_some()
    }

    /// Parse a fixture: a JSON object mapping table names to
    /// `{"columns": [...], "rows": [[...], ...]}`.
    pub fn from_fixture_str(json: &str) -> Result<Self> {
        let tables: HashMap<String, TableData> =
            serde_json::from_str(json).context("Failed to parse table fixture")?;

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    pub fn from_fixture_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read table fixture {}", path.display()))?;
        let store = Self::from_fixture_str(&json)
            .with_context(|| format!("Invalid table fixture {}", path.display()))?;

        log::info!(
            "Loaded {} tables from fixture {}",
            store.tables.read().len(),
            path.display()
        );
        Ok(store)
    }
}

#[async_trait::async_trait]
impl TableStore for MemoryStore {
    async fn get_table(&self, name: &str) -> Result<TableData> {
        Ok(self.tables.read().get(name).cloned().unwrap_or_default())
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.tables.read().keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_absent_table_reads_empty() {
        let store = MemoryStore::new();
        let table = store.get_table("Nope").await.unwrap();
        assert_eq!(table, TableData::empty());
    }

    #[tokio::test]
    async fn test_put_replace_and_remove() {
        let store = MemoryStore::new();
        store.put_table("B", TableData::from_text_rows(&["x"], &[&["1"]]));
        store.put_table("A", TableData::empty());
        store.put_table("B", TableData::from_text_rows(&["x"], &[&["2"]]));

        assert_eq!(store.list_tables().await.unwrap(), vec!["A", "B"]);
        assert_eq!(store.get_table("B").await.unwrap().rows, vec![vec![json!("2")]]);

        assert!(store.remove_table("A"));
        assert!(!store.remove_table("A"));
        assert_eq!(store.list_tables().await.unwrap(), vec!["B"]);
    }

    #[tokio::test]
    async fn test_fixture_parsing() {
        let fixture = json!({
            "Definicion_ListasCotejo": {
                "columns": ["IDListaCotejo", "IDItem", "DescripcionItem"],
                "rows": [["LISTA001", "ITEM001", "Item 1 Description"]]
            },
            "Vacia": {}
        })
        .to_string();

        let store = MemoryStore::from_fixture_str(&fixture).unwrap();
        let table = store.get_table("Definicion_ListasCotejo").await.unwrap();
        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.rows.len(), 1);
        assert!(store.get_table("Vacia").await.unwrap().is_empty());
    }

    #[test]
    fn test_fixture_rejects_non_object() {
        assert!(MemoryStore::from_fixture_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_missing_fixture_file_is_an_error() {
        let err = MemoryStore::from_fixture_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read table fixture"));
    }
}
