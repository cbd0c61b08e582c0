use thiserror::Error;

pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Faults raised while reading or decoding tables.
///
/// An instrument that does not exist is not a fault; lookups report it as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("table '{table}' row {row} has no cell for column '{column}'")]
    ShortRow {
        table: String,
        row: usize,
        column: String,
    },

    #[error("table '{table}' row {row} column '{column}' holds a non-text value: {value}")]
    InvalidCell {
        table: String,
        row: usize,
        column: String,
        value: serde_json::Value,
    },

    #[error("failed to read table '{table}'")]
    Store {
        table: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ResolveError {
    pub fn store(table: &str, source: anyhow::Error) -> Self {
        Self::Store {
            table: table.to_string(),
            source,
        }
    }
}
