use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format shared by row dates and the date prefix of execution timestamps.
pub const ROW_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Failure,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "success",
            ExecutionStatus::Failure => "failure",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown execution status '{}' (expected 'success' or 'failure')", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ExecutionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(ExecutionStatus::Success),
            "failure" => Ok(ExecutionStatus::Failure),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// One execution of a payment pipeline as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Timestamp text such as "2024-01-01 10:15:00".
    pub last_execution: String,
    pub status: ExecutionStatus,
    pub amount1: String,
    pub amount2: String,
    pub currency1: String,
    pub currency2: String,
}

impl PipelineRow {
    /// The portion of `last_execution` preceding the first space.
    pub fn execution_date(&self) -> &str {
        self.last_execution
            .split_once(' ')
            .map_or(self.last_execution.as_str(), |(date, _)| date)
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.execution_date(), ROW_DATE_FORMAT).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    #[serde(default)]
    pub id: String,
    pub date: String,
    pub amount1: String,
    pub amount2: String,
    pub currency: String,
}

impl TransactionRow {
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, ROW_DATE_FORMAT).ok()
    }
}

/// A display-ready aggregate row. Field names serialize to the table headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "Currency", default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "Amount 1")]
    pub amount1: String,
    #[serde(rename = "Amount 2")]
    pub amount2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub label: String,
    pub value: String,
}

impl KeyValue {
    fn new(label: &str, value: &str) -> Self {
        Self { label: label.to_string(), value: value.to_string() }
    }
}

impl SummaryRow {
    /// Label/value pairs in column order, for key-value table rendering.
    pub fn key_values(&self) -> Vec<KeyValue> {
        let mut pairs = vec![KeyValue::new("Date", &self.date)];
        if let Some(status) = &self.status {
            pairs.push(KeyValue::new("Status", status));
        }
        if let Some(currency) = &self.currency {
            pairs.push(KeyValue::new("Currency", currency));
        }
        pairs.push(KeyValue::new("Amount 1", &self.amount1));
        pairs.push(KeyValue::new("Amount 2", &self.amount2));
        pairs
    }
}
