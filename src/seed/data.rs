use crate::config::TableNames;
use crate::model::TableData;
use crate::store::MemoryStore;

/// Demo instrument table: one instrument of every kind the resolver knows,
/// plus one whose label it does not.
pub fn seed_instrument_table() -> TableData {
    TableData::from_text_rows(
        &["IDInstrumento", "NombreInstrumento", "TipoInstrumento", "IDInstrumentoTipo"],
        &[
            &["INST001", "Mi Lista de Cotejo", "Lista de Cotejo", "LISTA001"],
            &["INST002", "Rúbrica de Exposición Oral", "Rúbrica", "RUB001"],
            &["INST003", "Examen Parcial", "Calificación Directa", ""],
            &["INST004", "Lista de Laboratorio", "Lista de Cotejo", "LISTA002"],
            &["INST005", "Portafolio de Evidencias", "Portafolio", "PORT001"],
        ],
    )
}

/// Demo checklist items. LISTA002 rows are interleaved with LISTA001 rows.
pub fn seed_checklist_item_table() -> TableData {
    TableData::from_text_rows(
        &["IDListaCotejo", "IDItem", "DescripcionItem"],
        &[
            &["LISTA001", "ITEM001", "Item 1 Description"],
            &["LISTA002", "ITEM101", "Usa bata y lentes de seguridad"],
            &["LISTA001", "ITEM002", "Item 2 Description"],
            &["LISTA002", "ITEM102", "Registra las mediciones en la bitácora"],
            &["LISTA002", "ITEM103", "Deja limpia el área de trabajo"],
        ],
    )
}

/// Install the demo tables under the given table names
pub fn load_seed_data(store: &MemoryStore, tables: &TableNames) {
    store.put_table(tables.instruments.clone(), seed_instrument_table());
    store.put_table(tables.checklist_items.clone(), seed_checklist_item_table());
    log::info!(
        "Seed data loaded into tables {} and {}",
        tables.instruments,
        tables.checklist_items
    );
}
