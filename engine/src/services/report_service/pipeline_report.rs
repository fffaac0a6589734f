// Handler for the pipeline execution summary
use std::sync::Arc;
use tokio::sync::RwLock;

use super::helpers::{build_filter, build_report};
use crate::aggregation::PipelineAggregator;
use crate::data::row_store::RowStore;
use crate::error::EngineError;
use crate::services::{ReportRequest, ReportResponse};

pub async fn handle_pipeline_report(
    req_payload: ReportRequest,
    row_store: Arc<RwLock<RowStore>>,
) -> Result<ReportResponse, EngineError> {
    let filter = build_filter(&req_payload)?;

    let store = row_store.read().await;
    let rows = store.pipeline_rows(&filter);
    drop(store);

    if rows.is_empty() {
        tracing::warn!(?filter, "No pipeline rows match the filter; report will be empty");
    }

    let report = build_report(&PipelineAggregator, rows.as_slice());
    tracing::debug!(report_id = %report.report_id, input_rows = report.input_rows, groups = report.rows.len(), "Pipeline report built");
    Ok(report)
}
