//! Read applicant rows from an Excel workbook
//!
//! The first row holds the column names; every following row becomes one
//! [`Row`]. Blank rows are kept so a row's position matches the sheet.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Reader, Xlsx, open_workbook};

use super::Row;

/// Render a cell the way it reads in the sheet
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Whole numbers (salaries, ids) without a trailing ".0"
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}

/// Read rows from `sheet`, or from the first sheet when none is given
pub fn read_excel_rows<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .context("Excel file has no sheets")?
            .clone(),
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(cell_to_string).collect(),
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    for row in rows {
        let mut fields = Row::new();
        for (col_idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = row.get(col_idx).map(cell_to_string).unwrap_or_default();
            fields.insert(header.clone(), value);
        }
        records.push(fields);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Float(100000.0)), "100000");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::String("  Engineer ".into())), "Engineer");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
    }

    #[test]
    fn test_read_named_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applicants.xlsx");

        let mut workbook = Workbook::new();
        let other = workbook.add_worksheet();
        other.set_name("Notes").unwrap();
        other.write_string(0, 0, "ignored").unwrap();

        let sheet = workbook.add_worksheet();
        sheet.set_name("Лист1").unwrap();
        for (col, name) in ["ФИО", "Должность", "Ожидания по ЗП", "Статус", "Комментарий"]
            .iter()
            .enumerate()
        {
            sheet.write_string(0, col as u16, *name).unwrap();
        }
        sheet.write_string(1, 0, "Иванов Иван Иванович ").unwrap();
        sheet.write_string(1, 1, "Engineer").unwrap();
        sheet.write_number(1, 2, 150000.0).unwrap();
        sheet.write_string(1, 3, "New").unwrap();
        sheet.write_string(3, 0, "Petrov Petr").unwrap();
        sheet.write_string(3, 1, "Designer").unwrap();
        workbook.save(&path).unwrap();

        let rows = read_excel_rows(&path, Some("Лист1")).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["ФИО"], "Иванов Иван Иванович");
        assert_eq!(rows[0]["Ожидания по ЗП"], "150000");
        assert_eq!(rows[0]["Комментарий"], "");
        assert!(rows[1].values().all(|v| v.is_empty()));
        assert_eq!(rows[2]["Должность"], "Designer");
        assert_eq!(rows[2]["Статус"], "");
    }

    #[test]
    fn test_default_is_first_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("first.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "ФИО").unwrap();
        sheet.write_string(1, 0, "Smith John").unwrap();
        workbook.save(&path).unwrap();

        let rows = read_excel_rows(&path, None).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["ФИО"], "Smith John");
    }

    #[test]
    fn test_missing_sheet_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        let mut workbook = Workbook::new();
        workbook.add_worksheet();
        workbook.save(&path).unwrap();

        let err = read_excel_rows(&path, Some("Лист1")).unwrap_err();
        assert!(err.to_string().contains("Лист1"));
    }
}
