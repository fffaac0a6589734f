// Pipeline execution summaries: one row per (date, currency1, currency2, status).
use super::{format_currency, AggregateBucket, RowAggregator};
use shared::models::{ExecutionStatus, PipelineRow, SummaryRow};
use shared::utils::capitalize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PipelineKey {
    pub date: String,
    pub currency1: String,
    pub currency2: String,
    pub status: ExecutionStatus,
}

pub struct PipelineAggregator;

impl RowAggregator for PipelineAggregator {
    type Row = PipelineRow;
    type Key = PipelineKey;

    fn name(&self) -> &str {
        "pipeline"
    }

    fn group_key(&self, row: &PipelineRow) -> PipelineKey {
        PipelineKey {
            date: row.execution_date().to_string(),
            currency1: row.currency1.clone(),
            currency2: row.currency2.clone(),
            status: row.status,
        }
    }

    fn amounts<'r>(&self, row: &'r PipelineRow) -> (&'r str, &'r str) {
        (&row.amount1, &row.amount2)
    }

    fn summarize(&self, bucket: &AggregateBucket<PipelineKey>) -> SummaryRow {
        SummaryRow {
            date: bucket.key.date.clone(),
            status: Some(capitalize(bucket.key.status.as_str())),
            currency: None,
            amount1: format_currency(bucket.total_amount1, &bucket.key.currency1),
            amount2: format_currency(bucket.total_amount2, &bucket.key.currency2),
        }
    }

    fn compare(&self, a: &SummaryRow, b: &SummaryRow) -> Ordering {
        a.date.cmp(&b.date)
    }
}
