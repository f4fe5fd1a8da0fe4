use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Record, Table};

/// Columns every input file must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Country",
    "Year",
    "IT_Specialists",
    "IT_Export_Million_USD",
    "Startups",
    "Investments_Million_USD",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported file extension: .{0} (expected .csv)")]
    UnsupportedExtension(String),

    #[error("CSV is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Line {line}: Year '{value}' is not a number")]
    InvalidYear { line: usize, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a metrics table from a file on disk.
pub fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ext != "csv" {
        return Err(LoadError::UnsupportedExtension(ext).into());
    }

    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    load_csv(file).with_context(|| format!("loading {}", path.display()))
}

/// Parse a metrics table from CSV text.
///
/// The header row must name every column in [`REQUIRED_COLUMNS`]; any other
/// columns are ignored. `Year` is rounded to the nearest integer (ties to
/// even); metric cells are kept verbatim.
pub fn load_csv<R: Read>(input: R) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing).into());
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        // Header is line 1.
        let line = row_no + 2;
        let raw = result.with_context(|| format!("CSV line {line}"))?;
        records.push(raw.into_record(line)?);
    }

    Ok(Table::from_records(records))
}

// ---------------------------------------------------------------------------
// Row deserialisation
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "IT_Specialists")]
    it_specialists: String,
    #[serde(rename = "IT_Export_Million_USD")]
    it_export_million_usd: String,
    #[serde(rename = "Startups")]
    startups: String,
    #[serde(rename = "Investments_Million_USD")]
    investments_million_usd: String,
}

impl RawRecord {
    fn into_record(self, line: usize) -> Result<Record, LoadError> {
        let year = normalize_year(&self.year).ok_or_else(|| LoadError::InvalidYear {
            line,
            value: self.year.clone(),
        })?;

        Ok(Record {
            country: self.country,
            year,
            it_specialists: self.it_specialists,
            it_export_million_usd: self.it_export_million_usd,
            startups: self.startups,
            investments_million_usd: self.investments_million_usd,
        })
    }
}

/// Round a year cell to the nearest whole number, ties to even.
pub fn normalize_year(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.round_ties_even() as i64)
}
