//! Tabular input: rows of named fields
//!
//! `.csv` files go through the csv reader, everything else is treated as an
//! Excel workbook.

pub mod csv_reader;
pub mod excel;

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

pub use csv_reader::read_csv_rows;
pub use excel::read_excel_rows;

/// One data row keyed by column name
pub type Row = HashMap<String, String>;

/// Read all data rows of the file at `path`
///
/// `sheet` only applies to workbooks.
pub fn read_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<Row>> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        read_csv_rows(path)
    } else {
        read_excel_rows(path, sheet)
    }
}
