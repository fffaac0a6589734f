// In-memory holder for the rows feeding the dashboard reports
use super::filter::RowFilter;
use shared::models::{PipelineRow, TransactionRow};

#[derive(Debug, Default)]
pub struct RowStore {
    pipelines: Vec<PipelineRow>,
    transactions: Vec<TransactionRow>,
}

impl RowStore {
    pub fn new() -> Self {
        RowStore {
            pipelines: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Appends rows, keeping load order. Returns the number added.
    pub fn add_pipeline_rows(&mut self, rows: Vec<PipelineRow>) -> usize {
        let added = rows.len();
        self.pipelines.extend(rows);
        added
    }

    pub fn add_transaction_rows(&mut self, rows: Vec<TransactionRow>) -> usize {
        let added = rows.len();
        self.transactions.extend(rows);
        added
    }

    pub fn pipeline_rows(&self, filter: &RowFilter) -> Vec<PipelineRow> {
        self.pipelines
            .iter()
            .filter(|row| filter.matches_pipeline(row))
            .cloned()
            .collect()
    }

    pub fn transaction_rows(&self, filter: &RowFilter) -> Vec<TransactionRow> {
        self.transactions
            .iter()
            .filter(|row| filter.matches_transaction(row))
            .cloned()
            .collect()
    }

    pub fn pipeline_count(&self) -> usize {
        self.pipelines.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn clear(&mut self) {
        self.pipelines.clear();
        self.transactions.clear();
    }
}
