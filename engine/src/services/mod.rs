// Request and response types for the report service.
// The service itself lives in `report_service`, one handler module per operation.
use serde::{Deserialize, Serialize};
use shared::models::SummaryRow;
use std::fmt;

pub mod report_service;

pub use report_service::ReportService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Pipelines,
    Transactions,
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Pipelines => f.write_str("pipeline"),
            DatasetKind::Transactions => f.write_str("transaction"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRowsRequest {
    /// CSV file, or a JSON array when the extension is `.json`.
    pub file_path: String,
    pub dataset: DatasetKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRowsResponse {
    pub success: bool,
    pub message: String,
    pub rows_loaded: usize,
}

/// Filter form values as submitted. Blank fields mean "no restriction".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub currency: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub report_id: String,
    pub report_name: String,
    /// Rows that passed the filter and were aggregated.
    pub input_rows: usize,
    pub rows: Vec<SummaryRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub pipelines: ReportResponse,
    pub transactions: ReportResponse,
}
