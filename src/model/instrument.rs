use crate::error::ResolveResult;
use crate::model::{FromRow, Id, RowView};
use serde::{Deserialize, Serialize};

pub const RUBRIC_LABEL: &str = "Rúbrica";
pub const CHECKLIST_LABEL: &str = "Lista de Cotejo";
pub const DIRECT_GRADING_LABEL: &str = "Calificación Directa";

/// The kind of an evaluation instrument, taken from its type label.
///
/// Labels are matched literally; anything else is kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstrumentType {
    Rubric,
    Checklist,
    DirectGrading,
    Other(String),
}

impl InstrumentType {
    pub fn from_label(label: &str) -> Self {
        match label {
            RUBRIC_LABEL => Self::Rubric,
            CHECKLIST_LABEL => Self::Checklist,
            DIRECT_GRADING_LABEL => Self::DirectGrading,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Rubric => RUBRIC_LABEL,
            Self::Checklist => CHECKLIST_LABEL,
            Self::DirectGrading => DIRECT_GRADING_LABEL,
            Self::Other(label) => label,
        }
    }
}

/// A row of the instrument table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentRecord {
    pub id: Id,
    pub name: String,
    pub type_label: String,
    /// Key into the table that holds this instrument's type-specific rows
    pub type_reference_id: Id,
}

impl InstrumentRecord {
    pub const ID_COLUMN: &'static str = "IDInstrumento";
    pub const NAME_COLUMN: &'static str = "NombreInstrumento";
    pub const TYPE_COLUMN: &'static str = "TipoInstrumento";
    pub const TYPE_REFERENCE_COLUMN: &'static str = "IDInstrumentoTipo";

    pub fn instrument_type(&self) -> InstrumentType {
        InstrumentType::from_label(&self.type_label)
    }
}

impl FromRow for InstrumentRecord {
    const COLUMNS: &'static [&'static str] = &[
        Self::ID_COLUMN,
        Self::NAME_COLUMN,
        Self::TYPE_COLUMN,
        Self::TYPE_REFERENCE_COLUMN,
    ];

    fn from_row(row: &RowView<'_>) -> ResolveResult<Self> {
        Ok(Self {
            id: row.text(Self::ID_COLUMN)?,
            name: row.text(Self::NAME_COLUMN)?,
            type_label: row.text(Self::TYPE_COLUMN)?,
            type_reference_id: row.text(Self::TYPE_REFERENCE_COLUMN)?,
        })
    }
}
