//! Read applicant rows from a CSV file with a header line
//!
//! Lines holding only separators are kept as blank rows.

use std::path::Path;

use anyhow::{Context, Result};

use super::Row;

pub fn read_csv_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header: {}", path.display()))?
        .clone();

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV line {}", idx + 2))?;

        let mut fields = Row::new();
        for (col_idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = record.get(col_idx).unwrap_or_default();
            fields.insert(header.to_string(), value.to_string());
        }
        rows.push(fields);
    }

    Ok(rows)
}
