//! Write the outcome of a batch to an Excel workbook

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::import::{BatchReport, RecordReport};

const SHEET_NAME: &str = "Import";

const COLUMNS: [&str; 5] = ["row", "full_name", "stage", "applicant_id", "error"];

/// One line per processed record, in processing order
pub fn write_import_report(report: &BatchReport, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }

    for (row_idx, record) in report.records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        write_record(worksheet, row, record)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save report: {}", path.display()))?;

    Ok(())
}

fn write_record(ws: &mut rust_xlsxwriter::Worksheet, row: u32, record: &RecordReport) -> Result<()> {
    ws.write_number(row, 0, record.index as f64)?;
    ws.write_string(row, 1, &record.full_name)?;
    ws.write_string(row, 2, &record.stage.to_string())?;
    if let Some(id) = record.applicant_id {
        ws.write_number(row, 3, id as f64)?;
    }
    if let Some(ref error) = record.error {
        ws.write_string(row, 4, error)?;
    }
    Ok(())
}
