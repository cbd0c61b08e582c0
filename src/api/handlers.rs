use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::logic::{self, InstrumentResolver};
use crate::model::{InstrumentRecord, ResolvedDetail, TableData};
use crate::store::TableStore;

/// Shared handler state: the store handle and the resolver reading from it
pub struct AppState<S> {
    pub store: Arc<S>,
    pub resolver: InstrumentResolver,
}

impl<S> AppState<S> {
    pub fn new(store: Arc<S>, resolver: InstrumentResolver) -> Self {
        Self { store, resolver }
    }
}

// Manual impl so `S` itself need not be `Clone`
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            resolver: self.resolver.clone(),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> ListResponse<T> {
    fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

fn internal_error(e: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(&e.to_string())),
    )
}

pub async fn get_instrument_details<S: TableStore>(
    State(state): State<AppState<S>>,
    Path(instrument_id): Path<String>,
) -> ApiResult<ResolvedDetail> {
    match state
        .resolver
        .resolve(state.store.as_ref(), &instrument_id)
        .await
    {
        Ok(Some(detail)) => Ok(Json(detail)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(&format!(
                "Instrument '{}' not found",
                instrument_id
            ))),
        )),
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn list_instruments<S: TableStore>(
    State(state): State<AppState<S>>,
) -> ApiResult<ListResponse<InstrumentRecord>> {
    let instruments = logic::list_instruments(state.store.as_ref(), state.resolver.tables())
        .await
        .map_err(|e| {
            log::error!("Failed to list instruments: {}", e);
            internal_error(e)
        })?;

    Ok(Json(ListResponse::new(instruments)))
}

pub async fn list_tables<S: TableStore>(
    State(state): State<AppState<S>>,
) -> ApiResult<ListResponse<String>> {
    let names = state.store.list_tables().await.map_err(|e| {
        log::error!("Failed to list tables: {:#}", e);
        internal_error(format!("{:#}", e))
    })?;

    Ok(Json(ListResponse::new(names)))
}

pub async fn get_table<S: TableStore>(
    State(state): State<AppState<S>>,
    Path(table_name): Path<String>,
) -> ApiResult<TableData> {
    let table = state.store.get_table(&table_name).await.map_err(|e| {
        log::error!("Failed to read table {}: {:#}", table_name, e);
        internal_error(format!("{:#}", e))
    })?;

    Ok(Json(table))
}
