use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use shared::models::{ExecutionStatus, PipelineRow, TransactionRow};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct DashboardCsvParser;

impl DashboardCsvParser {
    // CSV Header: id,name,lastExecution,status,amount1,currency1,amount2,currency2
    // Example Row: p-1,Card settlement,2024-01-01 10:15:00,success,"$1,234.56",USD,"€1,100.00",EUR
    pub fn load_pipeline_rows_from_csv(file_path: &Path, delimiter: u8) -> Result<Vec<PipelineRow>> {
        let (headers, records) = Self::read_records(file_path, delimiter)?;

        let mut rows = Vec::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            let line = Self::line_of(record, idx);
            let status_str = Self::required(record, &headers, "status", line)?;
            let status = status_str
                .parse::<ExecutionStatus>()
                .map_err(|e| anyhow!("Error parsing 'status' at line {}: {}", line, e))?;

            rows.push(PipelineRow {
                id: Self::get_field(record, &headers, "id").map_or_else(|| line.to_string(), str::to_string),
                name: Self::get_field(record, &headers, "name").unwrap_or_default().to_string(),
                last_execution: Self::required(record, &headers, "lastExecution", line)?.to_string(),
                status,
                amount1: Self::required(record, &headers, "amount1", line)?.to_string(),
                amount2: Self::required(record, &headers, "amount2", line)?.to_string(),
                currency1: Self::required(record, &headers, "currency1", line)?.trim().to_string(),
                currency2: Self::required(record, &headers, "currency2", line)?.trim().to_string(),
            });
        }
        Ok(rows)
    }

    // CSV Header: id,date,amount1,amount2,currency
    // Example Row: t-1,2024-03-01,"$1,000.00",$25.00,USD
    pub fn load_transaction_rows_from_csv(file_path: &Path, delimiter: u8) -> Result<Vec<TransactionRow>> {
        let (headers, records) = Self::read_records(file_path, delimiter)?;

        let mut rows = Vec::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            let line = Self::line_of(record, idx);
            rows.push(TransactionRow {
                id: Self::get_field(record, &headers, "id").map_or_else(|| line.to_string(), str::to_string),
                date: Self::required(record, &headers, "date", line)?.trim().to_string(),
                amount1: Self::required(record, &headers, "amount1", line)?.to_string(),
                amount2: Self::required(record, &headers, "amount2", line)?.to_string(),
                currency: Self::required(record, &headers, "currency", line)?.trim().to_string(),
            });
        }
        Ok(rows)
    }

    fn read_records(file_path: &Path, delimiter: u8) -> Result<(StringRecord, Vec<StringRecord>)> {
        let file = File::open(file_path)
            .with_context(|| format!("Failed to open CSV file '{}'", file_path.display()))?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();
        let mut records = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            // csv::Error carries its own line position.
            let record = result.with_context(|| format!("Error reading CSV data record {}", idx + 1))?;
            records.push(record);
        }
        Ok((headers, records))
    }

    // Physical line where the record starts; quoted fields may span lines.
    fn line_of(record: &StringRecord, idx: usize) -> u64 {
        record.position().map_or(idx as u64 + 2, |pos| pos.line())
    }

    fn required<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str, line: u64) -> Result<&'a str> {
        Self::get_field(record, headers, name)
            .ok_or_else(|| anyhow!("Missing '{}' field in CSV record at line {}", name, line))
    }

    // Columns are looked up by header name so files may order them freely.
    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|pos| record.get(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_pipeline_rows_valid_data() {
        let csv_content = "\
id,name,lastExecution,status,amount1,currency1,amount2,currency2
p-1,Card settlement,2024-01-01 10:15:00,success,\"$1,234.56\",USD,\"€1,100.00\",EUR
p-2,Payouts,2024-01-02 08:00:00,FAILURE,N/A,USD,£5.00,GBP";
        let tmp_file = create_test_csv(csv_content);
        let rows = DashboardCsvParser::load_pipeline_rows_from_csv(tmp_file.path(), b',').unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "p-1");
        assert_eq!(rows[0].name, "Card settlement");
        assert_eq!(rows[0].last_execution, "2024-01-01 10:15:00");
        assert_eq!(rows[0].status, ExecutionStatus::Success);
        assert_eq!(rows[0].amount1, "$1,234.56");
        assert_eq!(rows[0].currency2, "EUR");

        assert_eq!(rows[1].status, ExecutionStatus::Failure);
        assert_eq!(rows[1].amount1, "N/A"); // kept raw, zeroed at aggregation
    }

    #[test]
    fn test_load_pipeline_rows_reordered_columns_and_default_id() {
        let csv_content = "\
currency2;amount2;currency1;amount1;status;lastExecution
EUR;€2;USD;$1;success;2024-01-01 00:00:00";
        let tmp_file = create_test_csv(csv_content);
        let rows = DashboardCsvParser::load_pipeline_rows_from_csv(tmp_file.path(), b';').unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "2");
        assert_eq!(rows[0].name, "");
        assert_eq!(rows[0].amount2, "€2");
    }

    #[test]
    fn test_load_pipeline_rows_unknown_status() {
        let csv_content = "\
lastExecution,status,amount1,currency1,amount2,currency2
2024-01-01 00:00:00,pending,$1,USD,$1,USD";
        let tmp_file = create_test_csv(csv_content);
        let result = DashboardCsvParser::load_pipeline_rows_from_csv(tmp_file.path(), b',');
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Error parsing 'status' at line 2"));
        assert!(message.contains("'pending'"));
    }

    #[test]
    fn test_load_pipeline_rows_line_numbers_follow_multiline_fields() {
        let csv_content = "\
id,name,lastExecution,status,amount1,currency1,amount2,currency2
p-1,\"Card
settlement\",2024-01-01 10:15:00,success,$1,USD,$1,USD
p-2,Payouts,2024-01-02 08:00:00,pending,$1,USD,$1,USD";
        let tmp_file = create_test_csv(csv_content);
        let result = DashboardCsvParser::load_pipeline_rows_from_csv(tmp_file.path(), b',');
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Error parsing 'status' at line 4"), "{}", message);
    }

    #[test]
    fn test_default_id_is_starting_line_of_record() {
        let csv_content = "\
date,amount1,amount2,currency
\"2024-03-01\",\"$1,
000\",$2,USD
2024-03-02,$3,$4,EUR";
        let tmp_file = create_test_csv(csv_content);
        let rows = DashboardCsvParser::load_transaction_rows_from_csv(tmp_file.path(), b',').unwrap();
        assert_eq!(rows[0].id, "2");
        assert_eq!(rows[1].id, "4");
    }

    #[test]
    fn test_load_transaction_rows_valid_data() {
        let csv_content = "\
id,date,amount1,amount2,currency
t-1,2024-03-01,\"$1,000.00\",$25.00,USD
t-2,2024-03-01,€10.00,€1.00,EUR";
        let tmp_file = create_test_csv(csv_content);
        let rows = DashboardCsvParser::load_transaction_rows_from_csv(tmp_file.path(), b',').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount1, "$1,000.00");
        assert_eq!(rows[1].currency, "EUR");
    }

    #[test]
    fn test_load_transaction_rows_header_only() {
        let tmp_file = create_test_csv("id,date,amount1,amount2,currency");
        let rows = DashboardCsvParser::load_transaction_rows_from_csv(tmp_file.path(), b',').unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_transaction_rows_missing_field() {
        let csv_content = "\
id,date,amount1,amount2
t-1,2024-03-01,$1,$2";
        let tmp_file = create_test_csv(csv_content);
        let result = DashboardCsvParser::load_transaction_rows_from_csv(tmp_file.path(), b',');
        assert!(result.unwrap_err().to_string().contains("Missing 'currency' field in CSV record at line 2"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = DashboardCsvParser::load_transaction_rows_from_csv(Path::new("no_such_rows.csv"), b',');
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to open CSV file"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
