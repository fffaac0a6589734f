// Helper functions shared by the report handlers
use chrono::NaiveDate;
use shared::models::{ExecutionStatus, ROW_DATE_FORMAT};
use uuid::Uuid;

use crate::aggregation::RowAggregator;
use crate::data::filter::RowFilter;
use crate::error::EngineError;
use crate::services::{ReportRequest, ReportResponse};

pub fn build_filter(req_payload: &ReportRequest) -> Result<RowFilter, EngineError> {
    let from_date = parse_form_date("from_date", req_payload.from_date.as_deref())?;
    let to_date = parse_form_date("to_date", req_payload.to_date.as_deref())?;
    if let (Some(from), Some(to)) = (from_date, to_date) {
        if from > to {
            return Err(EngineError::InvalidFilter(format!("from_date {} is after to_date {}", from, to)));
        }
    }

    let status = match non_blank(req_payload.status.as_deref()) {
        Some(raw) => Some(
            raw.parse::<ExecutionStatus>()
                .map_err(|e| EngineError::InvalidFilter(e.to_string()))?,
        ),
        None => None,
    };

    Ok(RowFilter {
        from_date,
        to_date,
        currency: non_blank(req_payload.currency.as_deref()).map(str::to_uppercase),
        status,
    })
}

fn parse_form_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, EngineError> {
    match non_blank(value) {
        Some(raw) => NaiveDate::parse_from_str(raw, ROW_DATE_FORMAT)
            .map(Some)
            .map_err(|e| EngineError::InvalidFilter(format!("{} '{}' is not a YYYY-MM-DD date: {}", field, raw, e))),
        None => Ok(None),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn build_report<A: RowAggregator>(aggregator: &A, rows: &[A::Row]) -> ReportResponse {
    let summaries = aggregator.aggregate(rows);
    ReportResponse {
        report_id: Uuid::new_v4().to_string(),
        report_name: aggregator.name().to_string(),
        input_rows: rows.len(),
        rows: summaries,
    }
}
