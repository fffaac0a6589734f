// The ReportService owns the row store and dispatches each operation to its
// handler module.
use super::{DashboardReport, LoadRowsRequest, LoadRowsResponse, ReportRequest, ReportResponse};
use crate::data::row_store::RowStore;
use crate::error::EngineError;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod helpers;
pub mod load_rows;
pub mod pipeline_report;
pub mod transaction_report;

pub struct ReportService {
    row_store: Arc<RwLock<RowStore>>,
    csv_delimiter: u8,
}

impl ReportService {
    pub fn new(row_store: Arc<RwLock<RowStore>>, csv_delimiter: u8) -> Self {
        ReportService { row_store, csv_delimiter }
    }

    pub async fn load_rows(&self, request: LoadRowsRequest) -> Result<LoadRowsResponse, EngineError> {
        tracing::info!(
            path = %request.file_path,
            dataset = %request.dataset,
            "Received LoadRowsRequest, dispatching to handler."
        );
        let path = request.file_path.clone();
        let result = load_rows::handle_load_rows(request, self.row_store.clone(), self.csv_delimiter).await;
        match &result {
            Ok(response) => tracing::info!(path = %path, count = response.rows_loaded, "Rows loaded"),
            Err(e) => tracing::error!(path = %path, error_detail = %e, "Failed to load rows"),
        }
        result
    }

    pub async fn pipeline_report(&self, request: ReportRequest) -> Result<ReportResponse, EngineError> {
        tracing::info!(
            from_date = ?request.from_date,
            to_date = ?request.to_date,
            currency = ?request.currency,
            status = ?request.status,
            "Received pipeline ReportRequest, dispatching to handler."
        );
        pipeline_report::handle_pipeline_report(request, self.row_store.clone()).await
    }

    pub async fn transaction_report(&self, request: ReportRequest) -> Result<ReportResponse, EngineError> {
        tracing::info!(
            from_date = ?request.from_date,
            to_date = ?request.to_date,
            currency = ?request.currency,
            "Received transaction ReportRequest, dispatching to handler."
        );
        transaction_report::handle_transaction_report(request, self.row_store.clone()).await
    }

    /// Both summaries under the same filter, as shown side by side on the dashboard.
    pub async fn dashboard_report(&self, request: ReportRequest) -> Result<DashboardReport, EngineError> {
        let pipelines = self.pipeline_report(request.clone()).await?;
        let transactions = self.transaction_report(request).await?;
        Ok(DashboardReport { pipelines, transactions })
    }
}
