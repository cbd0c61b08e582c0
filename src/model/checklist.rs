use crate::error::ResolveResult;
use crate::model::{FromRow, Id, RowView};
use serde::{Deserialize, Serialize};

/// A row of the checklist item table. Many items share one `list_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub list_id: Id,
    pub item_id: Id,
    pub description: String,
}

impl ChecklistItem {
    pub const LIST_ID_COLUMN: &'static str = "IDListaCotejo";
    pub const ITEM_ID_COLUMN: &'static str = "IDItem";
    pub const DESCRIPTION_COLUMN: &'static str = "DescripcionItem";
}

impl FromRow for ChecklistItem {
    const COLUMNS: &'static [&'static str] = &[
        Self::LIST_ID_COLUMN,
        Self::ITEM_ID_COLUMN,
        Self::DESCRIPTION_COLUMN,
    ];

    fn from_row(row: &RowView<'_>) -> ResolveResult<Self> {
        Ok(Self {
            list_id: row.text(Self::LIST_ID_COLUMN)?,
            item_id: row.text(Self::ITEM_ID_COLUMN)?,
            description: row.text(Self::DESCRIPTION_COLUMN)?,
        })
    }
}
