use crate::error::{ResolveError, ResolveResult};
use crate::model::cell_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A whole table as the store hands it out: an ordered header and ordered
/// row tuples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

impl TableData {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// What a missing table reads as.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table whose cells are all text
    pub fn from_text_rows(columns: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| Value::String(cell.to_string())).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first header cell named `name`
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Decode every row into `T`, preserving row order.
    ///
    /// A table without rows decodes to nothing regardless of its header, so an
    /// absent table is never a fault.
    pub fn decode<T: FromRow>(&self, table_name: &str) -> ResolveResult<Vec<T>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let mut positions = HashMap::with_capacity(T::COLUMNS.len());
        for column in T::COLUMNS {
            let position =
                self.column_position(column)
                    .ok_or_else(|| ResolveError::MissingColumn {
                        table: table_name.to_string(),
                        column: column.to_string(),
                    })?;
            positions.insert(*column, position);
        }

        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| {
                T::from_row(&RowView {
                    table: table_name,
                    index,
                    cells,
                    positions: &positions,
                })
            })
            .collect()
    }
}

/// One row, addressed by column name.
pub struct RowView<'a> {
    table: &'a str,
    index: usize,
    cells: &'a [Value],
    positions: &'a HashMap<&'static str, usize>,
}

impl<'a> RowView<'a> {
    pub fn text(&self, column: &str) -> ResolveResult<String> {
        let position =
            self.positions
                .get(column)
                .copied()
                .ok_or_else(|| ResolveError::MissingColumn {
                    table: self.table.to_string(),
                    column: column.to_string(),
                })?;

        let value = self.cells.get(position).ok_or_else(|| ResolveError::ShortRow {
            table: self.table.to_string(),
            row: self.index,
            column: column.to_string(),
        })?;

        cell_text(value).ok_or_else(|| ResolveError::InvalidCell {
            table: self.table.to_string(),
            row: self.index,
            column: column.to_string(),
            value: value.clone(),
        })
    }
}

/// A record that can be decoded from a table row.
pub trait FromRow: Sized {
    /// Header names the record reads. Each must be present in a non-empty table.
    const COLUMNS: &'static [&'static str];

    fn from_row(row: &RowView<'_>) -> ResolveResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Pair {
        key: String,
        value: String,
    }

    impl FromRow for Pair {
        const COLUMNS: &'static [&'static str] = &["Key", "Value"];

        fn from_row(row: &RowView<'_>) -> ResolveResult<Self> {
            Ok(Self {
                key: row.text("Key")?,
                value: row.text("Value")?,
            })
        }
    }

    fn pair(key: &str, value: &str) -> Pair {
        Pair {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_decode_by_header_name_not_position() {
        let table = TableData::from_text_rows(
            &["Extra", "Value", "Key"],
            &[&["x", "one", "a"], &["y", "two", "b"]],
        );

        let pairs: Vec<Pair> = table.decode("Pairs").unwrap();
        assert_eq!(pairs, vec![pair("a", "one"), pair("b", "two")]);
    }

    #[test]
    fn test_empty_table_decodes_to_nothing() {
        let pairs: Vec<Pair> = TableData::empty().decode("Pairs").unwrap();
        assert!(pairs.is_empty());

        // A header without rows is not checked either
        let header_only = TableData::from_text_rows(&["Unrelated"], &[]);
        let pairs: Vec<Pair> = header_only.decode("Pairs").unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_missing_column_is_a_fault() {
        let table = TableData::from_text_rows(&["Key"], &[&["a"]]);

        match table.decode::<Pair>("Pairs") {
            Err(ResolveError::MissingColumn { table, column }) => {
                assert_eq!(table, "Pairs");
                assert_eq!(column, "Value");
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_is_a_fault() {
        let table = TableData::from_text_rows(&["Key", "Value"], &[&["a", "one"], &["b"]]);

        match table.decode::<Pair>("Pairs") {
            Err(ResolveError::ShortRow { row, column, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Value");
            }
            other => panic!("expected ShortRow, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_cell_is_a_fault() {
        let table = TableData::new(
            vec!["Key".to_string(), "Value".to_string()],
            vec![vec![json!("a"), json!(true)]],
        );

        match table.decode::<Pair>("Pairs") {
            Err(ResolveError::InvalidCell { row, column, value, .. }) => {
                assert_eq!(row, 0);
                assert_eq!(column, "Value");
                assert_eq!(value, json!(true));
            }
            other => panic!("expected InvalidCell, got {:?}", other),
        }
    }

    #[test]
    fn test_first_duplicate_header_wins() {
        let table = TableData::from_text_rows(&["Key", "Value", "Value"], &[&["a", "first", "second"]]);

        let pairs: Vec<Pair> = table.decode("Pairs").unwrap();
        assert_eq!(pairs, vec![pair("a", "first")]);
    }

    #[test]
    fn test_table_data_json_shape() {
        let table: TableData = serde_json::from_value(json!({
            "columns": ["Key", "Value"],
            "rows": [["a", 1], ["b", null]]
        }))
        .unwrap();

        let pairs: Vec<Pair> = table.decode("Pairs").unwrap();
        assert_eq!(pairs, vec![pair("a", "1"), pair("b", "")]);
    }
}
