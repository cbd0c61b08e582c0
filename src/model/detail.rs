use crate::model::{ChecklistItem, Id, InstrumentRecord};
use serde::{Deserialize, Serialize};

pub const DIRECT_GRADE_MIN: i32 = 0;
pub const DIRECT_GRADE_MAX: i32 = 10;

/// Resolved view of an instrument.
///
/// `items` is only set for checklists and the grade bounds only for direct
/// grading; unset fields are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDetail {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub instrument_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ChecklistItemDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_grade: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<i32>,
}

impl ResolvedDetail {
    /// Only the fields every instrument has
    pub fn from_record(record: &InstrumentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            instrument_type: record.type_label.clone(),
            items: None,
            min_grade: None,
            max_grade: None,
        }
    }

    pub fn with_items(mut self, items: Vec<ChecklistItemDetail>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_direct_grade_range(mut self) -> Self {
        self.min_grade = Some(DIRECT_GRADE_MIN);
        self.max_grade = Some(DIRECT_GRADE_MAX);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItemDetail {
    pub id: Id,
    pub description: String,
}

impl From<ChecklistItem> for ChecklistItemDetail {
    fn from(item: ChecklistItem) -> Self {
        Self {
            id: item.item_id,
            description: item.description,
        }
    }
}
