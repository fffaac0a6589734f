// Grouping and summation of dashboard rows into display-ready summaries.
pub mod amount;
pub mod currency;
pub mod pipeline;
pub mod transaction;

pub use amount::parse_amount;
pub use currency::format_currency;
pub use pipeline::{PipelineAggregator, PipelineKey};
pub use transaction::{TransactionAggregator, TransactionKey};

use shared::models::SummaryRow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Running totals for one group key. Lives only for a single aggregation call.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateBucket<K> {
    pub key: K,
    pub total_amount1: f64,
    pub total_amount2: f64,
}

/// Common fold/format/sort algorithm; implementors describe how rows are keyed,
/// how a finished bucket is displayed, and how summaries are ordered.
pub trait RowAggregator: Send + Sync {
    type Row;
    type Key: Eq + Hash + Clone;

    fn name(&self) -> &str;
    fn group_key(&self, row: &Self::Row) -> Self::Key;
    /// The raw `(amount1, amount2)` texts of a row.
    fn amounts<'r>(&self, row: &'r Self::Row) -> (&'r str, &'r str);
    fn summarize(&self, bucket: &AggregateBucket<Self::Key>) -> SummaryRow;
    fn compare(&self, a: &SummaryRow, b: &SummaryRow) -> Ordering;

    /// Buckets in first-encounter order of their keys.
    fn buckets(&self, rows: &[Self::Row]) -> Vec<AggregateBucket<Self::Key>> {
        let mut index: HashMap<Self::Key, usize> = HashMap::new();
        let mut buckets: Vec<AggregateBucket<Self::Key>> = Vec::new();

        for row in rows {
            let key = self.group_key(row);
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                buckets.push(AggregateBucket { key, total_amount1: 0.0, total_amount2: 0.0 });
                buckets.len() - 1
            });
            let (amount1, amount2) = self.amounts(row);
            let bucket = &mut buckets[slot];
            bucket.total_amount1 += parse_amount(amount1);
            bucket.total_amount2 += parse_amount(amount2);
        }
        buckets
    }

    fn aggregate(&self, rows: &[Self::Row]) -> Vec<SummaryRow> {
        if rows.is_empty() {
            return Vec::new();
        }

        let buckets = self.buckets(rows);
        tracing::trace!(aggregator = self.name(), rows = rows.len(), groups = buckets.len(), "Rows grouped");

        let mut summaries: Vec<SummaryRow> = buckets.iter().map(|bucket| self.summarize(bucket)).collect();
        // Stable: equal sort keys keep first-encounter order.
        summaries.sort_by(|a, b| self.compare(a, b));
        summaries
    }
}
