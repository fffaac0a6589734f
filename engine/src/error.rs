use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

impl EngineError {
    /// Maps a loader failure onto the most specific variant available.
    /// I/O and CSV causes survive `anyhow` context wrapping.
    pub fn from_load_failure(err: anyhow::Error) -> Self {
        let err = match err.downcast::<std::io::Error>() {
            Ok(source) => return EngineError::IoError { source },
            Err(err) => err,
        };
        let err = match err.downcast::<csv::Error>() {
            Ok(source) => return EngineError::CsvSystemError { source },
            Err(err) => err,
        };
        match err.downcast::<serde_json::Error>() {
            Ok(source) => EngineError::JsonError { source },
            Err(err) => EngineError::CsvDataFormatError(format!("{:#}", err)),
        }
    }
}
