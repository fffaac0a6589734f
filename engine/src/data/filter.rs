// Row selection matching the dashboard's filter form.
use chrono::NaiveDate;
use shared::models::{ExecutionStatus, PipelineRow, TransactionRow};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    /// Inclusive lower bound on the row date.
    pub from_date: Option<NaiveDate>,
    /// Inclusive upper bound on the row date.
    pub to_date: Option<NaiveDate>,
    /// Currency code, compared case-insensitively.
    pub currency: Option<String>,
    /// Applies to pipeline rows only.
    pub status: Option<ExecutionStatus>,
}

impl RowFilter {
    pub fn is_empty(&self) -> bool {
        *self == RowFilter::default()
    }

    pub fn matches_pipeline(&self, row: &PipelineRow) -> bool {
        self.matches_date(|| row.calendar_date())
            && self
                .currency
                .as_deref()
                .map_or(true, |c| row.currency1.eq_ignore_ascii_case(c) || row.currency2.eq_ignore_ascii_case(c))
            && self.status.map_or(true, |s| row.status == s)
    }

    pub fn matches_transaction(&self, row: &TransactionRow) -> bool {
        self.matches_date(|| row.calendar_date())
            && self.currency.as_deref().map_or(true, |c| row.currency.eq_ignore_ascii_case(c))
    }

    // Unparseable row dates only fail when a bound is set.
    fn matches_date(&self, row_date: impl FnOnce() -> Option<NaiveDate>) -> bool {
        if self.from_date.is_none() && self.to_date.is_none() {
            return true;
        }
        match row_date() {
            Some(date) => {
                self.from_date.map_or(true, |start| date >= start) && self.to_date.map_or(true, |end| date <= end)
            }
            None => false,
        }
    }
}
