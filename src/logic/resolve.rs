use log::{error, info};
use std::backtrace::{Backtrace, BacktraceStatus};

use crate::config::TableNames;
use crate::error::{ResolveError, ResolveResult};
use crate::logic::{find_instrument_by_id, load_checklist_items};
use crate::model::{ChecklistItemDetail, InstrumentType, ResolvedDetail};
use crate::store::TableStore;

/// Resolves an instrument id into its detail view, joining in checklist items
/// for checklist instruments.
///
/// Every call re-reads the tables; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct InstrumentResolver {
    tables: TableNames,
}

impl InstrumentResolver {
    pub fn new(tables: TableNames) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &TableNames {
        &self.tables
    }

    /// Returns `Ok(None)` when no instrument has this id. Faults are logged
    /// and handed back unchanged.
    pub async fn resolve<S: TableStore + ?Sized>(
        &self,
        store: &S,
        instrument_id: &str,
    ) -> ResolveResult<Option<ResolvedDetail>> {
        match self.resolve_detail(store, instrument_id).await {
            Ok(detail) => Ok(detail),
            Err(e) => {
                log_fault(instrument_id, &e);
                Err(e)
            }
        }
    }

    async fn resolve_detail<S: TableStore + ?Sized>(
        &self,
        store: &S,
        instrument_id: &str,
    ) -> ResolveResult<Option<ResolvedDetail>> {
        info!("Resolving instrument details for {}", instrument_id);

        let Some(instrument) = find_instrument_by_id(store, &self.tables, instrument_id).await?
        else {
            info!("Instrument not found: {}", instrument_id);
            return Ok(None);
        };

        let kind = instrument.instrument_type();
        info!("Instrument found: {}, type: {}", instrument.name, kind.label());

        let detail = ResolvedDetail::from_record(&instrument);

        let detail = match kind {
            InstrumentType::Checklist => {
                let items: Vec<ChecklistItemDetail> = load_checklist_items(
                    store,
                    &self.tables,
                    &instrument.type_reference_id,
                )
                .await?
                .into_iter()
                .map(ChecklistItemDetail::from)
                .collect();

                info!(
                    "Checklist {} loaded with {} items",
                    instrument.type_reference_id,
                    items.len()
                );
                detail.with_items(items)
            }
            InstrumentType::DirectGrading => detail.with_direct_grade_range(),
            // Rubric criteria are not joined in yet; unknown labels keep the common fields
            InstrumentType::Rubric | InstrumentType::Other(_) => detail,
        };

        Ok(Some(detail))
    }
}

fn log_fault(instrument_id: &str, e: &ResolveError) {
    for line in fault_report(instrument_id, e, &Backtrace::capture()) {
        error!("{}", line);
    }
}

/// Message, cause chain, then the stack trace where the fault surfaced.
/// The trace is only captured when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE`
/// enables it.
fn fault_report(instrument_id: &str, e: &ResolveError, backtrace: &Backtrace) -> Vec<String> {
    let mut lines = vec![format!("Failed to resolve instrument {}: {}", instrument_id, e)];

    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        lines.push(format!("  caused by: {}", cause));
        source = std::error::Error::source(cause);
    }

    match backtrace.status() {
        BacktraceStatus::Captured => lines.push(format!("Stack:\n{}", backtrace)),
        _ => lines.push("Stack: unavailable (set RUST_BACKTRACE=1 to capture)".to_string()),
    }
    lines
}
