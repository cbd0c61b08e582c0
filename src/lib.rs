pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

use std::sync::Arc;

// Export API types
pub use api::handlers;
pub use api::routes;

pub use error::{ResolveError, ResolveResult};

// Export logic types
pub use logic::{find_instrument_by_id, list_instruments, load_checklist_items, InstrumentResolver};

// Export all model types
pub use model::*;

// Export store types
pub use store::{MemoryStore, TableStore};

/// Build the in-memory store a deployment reads from: the configured fixture
/// if there is one, otherwise the seed data when enabled, otherwise nothing.
pub fn build_store(config: &config::AppConfig) -> anyhow::Result<MemoryStore> {
    if let Some(path) = &config.store.fixture_path {
        return MemoryStore::from_fixture_file(path);
    }

    let store = MemoryStore::new();
    if config.store.load_seed_data {
        seed::load_seed_data(&store, &config.tables);
    } else {
        log::warn!("No table fixture configured and seed data disabled; serving empty tables");
    }
    Ok(store)
}

/// Router with state attached, ready to serve
pub fn build_app<S: TableStore + 'static>(
    store: Arc<S>,
    tables: config::TableNames,
) -> axum::Router {
    let state = api::AppState::new(store, InstrumentResolver::new(tables));
    routes::create_router::<S>().with_state(state)
}
