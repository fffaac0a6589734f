// Engine main entry point: load the configured row files and print both summaries as JSON.
use engine::config::settings::EngineSettings;
use engine::data::row_store::RowStore;
use engine::services::{DatasetKind, LoadRowsRequest, ReportRequest, ReportService};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    info!("Starting pipeline dashboard report engine...");

    let config_arg = std::env::args().nth(1).map(PathBuf::from);
    let settings = EngineSettings::resolve(config_arg.as_deref())?;
    info!(?settings, "Settings resolved");

    let row_store = Arc::new(RwLock::new(RowStore::new()));
    let service = ReportService::new(row_store, settings.delimiter_byte());

    let sources = [
        (settings.pipeline_rows_path.as_deref(), DatasetKind::Pipelines),
        (settings.transaction_rows_path.as_deref(), DatasetKind::Transactions),
    ];
    for (path, dataset) in sources {
        match path {
            Some(path) => {
                service.load_rows(load_request(path, dataset)).await?;
            }
            None => tracing::warn!(%dataset, "No rows file configured; summary will be empty"),
        }
    }

    let report = service.dashboard_report(ReportRequest::default()).await?;
    let output = if settings.pretty_output {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}

fn load_request(path: &Path, dataset: DatasetKind) -> LoadRowsRequest {
    LoadRowsRequest { file_path: path.to_string_lossy().into_owned(), dataset }
}
