// Transaction summaries: one row per (date, currency).
use super::{format_currency, AggregateBucket, RowAggregator};
use shared::models::{SummaryRow, TransactionRow};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionKey {
    pub date: String,
    pub currency: String,
}

pub struct TransactionAggregator;

impl RowAggregator for TransactionAggregator {
    type Row = TransactionRow;
    type Key = TransactionKey;

    fn name(&self) -> &str {
        "transaction"
    }

    fn group_key(&self, row: &TransactionRow) -> TransactionKey {
        TransactionKey { date: row.date.clone(), currency: row.currency.clone() }
    }

    fn amounts<'r>(&self, row: &'r TransactionRow) -> (&'r str, &'r str) {
        (&row.amount1, &row.amount2)
    }

    fn summarize(&self, bucket: &AggregateBucket<TransactionKey>) -> SummaryRow {
        SummaryRow {
            date: bucket.key.date.clone(),
            status: None,
            currency: Some(bucket.key.currency.clone()),
            amount1: format_currency(bucket.total_amount1, &bucket.key.currency),
            amount2: format_currency(bucket.total_amount2, &bucket.key.currency),
        }
    }

    /// Date ascending, then currency code ascending as plain strings,
    /// so on the same date "EUR" sorts before "USD".
    fn compare(&self, a: &SummaryRow, b: &SummaryRow) -> Ordering {
        a.date.cmp(&b.date).then_with(|| a.currency.cmp(&b.currency))
    }
}
