// Row lists exported as JSON arrays, e.g. a saved API response.
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_rows_from_json<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open JSON file '{}'", file_path.display()))?;
    let rows = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse rows from JSON file '{}'", file_path.display()))?;
    Ok(rows)
}
