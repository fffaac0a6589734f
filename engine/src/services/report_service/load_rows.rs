// Handler for loading row files into the store
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::data::csv_parser::DashboardCsvParser;
use crate::data::json_source::load_rows_from_json;
use crate::data::row_store::RowStore;
use crate::error::EngineError;
use crate::services::{DatasetKind, LoadRowsRequest, LoadRowsResponse};

pub async fn handle_load_rows(
    req_payload: LoadRowsRequest,
    row_store: Arc<RwLock<RowStore>>,
    delimiter: u8,
) -> Result<LoadRowsResponse, EngineError> {
    let path = Path::new(&req_payload.file_path);
    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    tracing::debug!(path = %req_payload.file_path, dataset = %req_payload.dataset, is_json, "Reading row file");

    let rows_loaded = match req_payload.dataset {
        DatasetKind::Pipelines => {
            let loaded = if is_json {
                load_rows_from_json(path)
            } else {
                DashboardCsvParser::load_pipeline_rows_from_csv(path, delimiter)
            };
            let rows = loaded.map_err(EngineError::from_load_failure)?;
            row_store.write().await.add_pipeline_rows(rows)
        }
        DatasetKind::Transactions => {
            let loaded = if is_json {
                load_rows_from_json(path)
            } else {
                DashboardCsvParser::load_transaction_rows_from_csv(path, delimiter)
            };
            let rows = loaded.map_err(EngineError::from_load_failure)?;
            row_store.write().await.add_transaction_rows(rows)
        }
    };

    Ok(LoadRowsResponse {
        success: true,
        message: format!("Loaded {} {} rows from {}", rows_loaded, req_payload.dataset, req_payload.file_path),
        rows_loaded,
    })
}
