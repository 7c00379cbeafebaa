//! Applicant records read from the source table

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::error::ImportError;
use super::upload::UploadedFile;
use crate::api::RemoteId;
use crate::source::Row;

/// Header names of the source table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub full_name: String,
    pub position: String,
    pub salary: String,
    pub status: String,
    pub comment: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            full_name: "ФИО".to_string(),
            position: "Должность".to_string(),
            salary: "Ожидания по ЗП".to_string(),
            status: "Статус".to_string(),
            comment: "Комментарий".to_string(),
        }
    }
}

/// One applicant row plus the fields derived while importing it
///
/// Derived fields are write-once: a setter called twice returns
/// [`ImportError::Record`] instead of overwriting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantRecord {
    /// "Last First [Middle]"
    pub full_name: String,
    pub position: String,
    pub salary_expectation: String,
    pub status_name: String,
    pub comment: Option<String>,

    /// Position among the data rows of the source table, blank rows included
    source_row: Option<usize>,
    vacancy_id: Option<RemoteId>,
    status_id: Option<RemoteId>,
    /// Outer `None`: not located yet. Inner `None`: no file found.
    resume_file_path: Option<Option<PathBuf>>,
    uploaded: Option<UploadedFile>,
    remote_applicant_id: Option<RemoteId>,
}

fn fill<T>(slot: &mut Option<T>, value: T, field: &str) -> Result<(), ImportError> {
    if slot.is_some() {
        return Err(ImportError::Record(format!("{} is already set", field)));
    }
    *slot = Some(value);
    Ok(())
}

impl ApplicantRecord {
    pub fn new(
        full_name: impl Into<String>,
        position: impl Into<String>,
        salary_expectation: impl Into<String>,
        status_name: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            position: position.into(),
            salary_expectation: salary_expectation.into(),
            status_name: status_name.into(),
            comment: comment.filter(|c| !c.is_empty()),
            ..Self::default()
        }
    }

    pub fn with_source_row(mut self, row: usize) -> Self {
        self.source_row = Some(row);
        self
    }

    pub fn source_row(&self) -> Option<usize> {
        self.source_row
    }

    pub fn vacancy_id(&self) -> Option<RemoteId> {
        self.vacancy_id
    }

    pub fn set_vacancy_id(&mut self, id: RemoteId) -> Result<(), ImportError> {
        fill(&mut self.vacancy_id, id, "vacancy_id")
    }

    pub fn status_id(&self) -> Option<RemoteId> {
        self.status_id
    }

    pub fn set_status_id(&mut self, id: RemoteId) -> Result<(), ImportError> {
        fill(&mut self.status_id, id, "status_id")
    }

    pub fn resume_file_path(&self) -> Option<&Path> {
        self.resume_file_path.as_ref().and_then(|p| p.as_deref())
    }

    pub fn set_resume_file_path(&mut self, path: Option<PathBuf>) -> Result<(), ImportError> {
        fill(&mut self.resume_file_path, path, "resume_file_path")
    }

    pub fn uploaded_file_id(&self) -> Option<RemoteId> {
        self.uploaded.and_then(|u| u.file_id)
    }

    pub fn uploaded_photo_id(&self) -> Option<RemoteId> {
        self.uploaded.and_then(|u| u.photo_id)
    }

    pub fn set_uploaded(&mut self, uploaded: UploadedFile) -> Result<(), ImportError> {
        fill(&mut self.uploaded, uploaded, "uploaded file")
    }

    pub fn remote_applicant_id(&self) -> Option<RemoteId> {
        self.remote_applicant_id
    }

    pub fn set_remote_applicant_id(&mut self, id: RemoteId) -> Result<(), ImportError> {
        fill(&mut self.remote_applicant_id, id, "remote_applicant_id")
    }
}

/// Build records from source rows
///
/// Every row must carry the full name, position, salary and status columns;
/// the comment column may be absent. Values are taken verbatim. Blank rows
/// produce no record but still count, so each record keeps its row position.
pub fn records_from_rows(rows: &[Row], columns: &ColumnNames) -> Result<Vec<ApplicantRecord>> {
    let mut records = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        if row.values().all(|v| v.is_empty()) {
            continue;
        }

        let field = |name: &str| -> Result<String> {
            match row.get(name) {
                Some(value) => Ok(value.clone()),
                None => bail!("Row {}: missing column '{}'", idx + 2, name),
            }
        };

        let record = ApplicantRecord::new(
            field(&columns.full_name)?,
            field(&columns.position)?,
            field(&columns.salary)?,
            field(&columns.status)?,
            row.get(&columns.comment).cloned(),
        );
        records.push(record.with_source_row(idx));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_records_from_rows_default_headers() {
        let rows = vec![row(&[
            ("ФИО", "Иванов Иван Иванович"),
            ("Должность", "Engineer"),
            ("Ожидания по ЗП", "100000 руб"),
            ("Статус", "New"),
            ("Комментарий", ""),
        ])];

        let records = records_from_rows(&rows, &ColumnNames::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name, "Иванов Иван Иванович");
        assert_eq!(records[0].salary_expectation, "100000 руб");
        assert_eq!(records[0].comment, None);
    }

    #[test]
    fn test_blank_rows_keep_row_positions() {
        let blank = row(&[
            ("ФИО", ""),
            ("Должность", ""),
            ("Ожидания по ЗП", ""),
            ("Статус", ""),
        ]);
        let rows = vec![
            row(&[
                ("ФИО", "A B"),
                ("Должность", "Engineer"),
                ("Ожидания по ЗП", "1"),
                ("Статус", "New"),
            ]),
            blank,
            row(&[
                ("ФИО", "C D"),
                ("Должность", "Designer"),
                ("Ожидания по ЗП", "2"),
                ("Статус", "New"),
            ]),
        ];

        let records = records_from_rows(&rows, &ColumnNames::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source_row(), Some(0));
        assert_eq!(records[1].full_name, "C D");
        assert_eq!(records[1].source_row(), Some(2));
    }

    #[test]
    fn test_missing_required_column_names_the_row() {
        let rows = vec![row(&[("ФИО", "Иванов Иван"), ("Должность", "Engineer")])];
        let err = records_from_rows(&rows, &ColumnNames::default()).unwrap_err();
        assert!(err.to_string().contains("Row 2"));
        assert!(err.to_string().contains("Ожидания по ЗП"));
    }

    #[test]
    fn test_derived_fields_are_write_once() {
        let mut record = ApplicantRecord::new("A B", "Engineer", "1", "New", None);
        record.set_vacancy_id(1).unwrap();
        assert!(matches!(record.set_vacancy_id(2), Err(ImportError::Record(_))));
        assert_eq!(record.vacancy_id(), Some(1));

        record.set_resume_file_path(None).unwrap();
        assert_eq!(record.resume_file_path(), None);
        assert!(record.set_resume_file_path(Some("x.pdf".into())).is_err());
    }

    #[test]
    fn test_uploaded_ids() {
        let mut record = ApplicantRecord::new("A B", "Engineer", "1", "New", None);
        assert_eq!(record.uploaded_file_id(), None);
        record
            .set_uploaded(UploadedFile {
                file_id: Some(10),
                photo_id: None,
            })
            .unwrap();
        assert_eq!(record.uploaded_file_id(), Some(10));
        assert_eq!(record.uploaded_photo_id(), None);
    }
}
