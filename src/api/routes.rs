use axum::{routing::get, Router};

use crate::api::handlers::{self, AppState};
use crate::store::TableStore;

pub fn create_router<S: TableStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Instruments
        .route("/instruments", get(handlers::list_instruments::<S>))
        .route(
            "/instruments/:instrument_id",
            get(handlers::get_instrument_details::<S>),
        )
        // Raw table access
        .route("/tables", get(handlers::list_tables::<S>))
        .route("/tables/:table_name", get(handlers::get_table::<S>))
}
