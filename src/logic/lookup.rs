use crate::config::TableNames;
use crate::error::{ResolveError, ResolveResult};
use crate::model::{ChecklistItem, InstrumentRecord, TableData};
use crate::store::TableStore;

async fn read_table<S: TableStore + ?Sized>(store: &S, name: &str) -> ResolveResult<TableData> {
    store
        .get_table(name)
        .await
        .map_err(|e| ResolveError::store(name, e))
}

/// All instruments, in table order
pub async fn list_instruments<S: TableStore + ?Sized>(
    store: &S,
    tables: &TableNames,
) -> ResolveResult<Vec<InstrumentRecord>> {
    read_table(store, &tables.instruments)
        .await?
        .decode(&tables.instruments)
}

/// First instrument whose id equals `instrument_id`.
///
/// The whole table is decoded first, so a malformed row anywhere in it is a
/// fault even if the match comes earlier.
pub async fn find_instrument_by_id<S: TableStore + ?Sized>(
    store: &S,
    tables: &TableNames,
    instrument_id: &str,
) -> ResolveResult<Option<InstrumentRecord>> {
    let instruments = list_instruments(store, tables).await?;
    Ok(instruments
        .into_iter()
        .find(|instrument| instrument.id == instrument_id))
}

/// Items belonging to checklist `list_id`, in table order. A missing item
/// table yields no items.
pub async fn load_checklist_items<S: TableStore + ?Sized>(
    store: &S,
    tables: &TableNames,
    list_id: &str,
) -> ResolveResult<Vec<ChecklistItem>> {
    let items: Vec<ChecklistItem> = read_table(store, &tables.checklist_items)
        .await?
        .decode(&tables.checklist_items)?;

    Ok(items
        .into_iter()
        .filter(|item| item.list_id == list_id)
        .collect())
}
