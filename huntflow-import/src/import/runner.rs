//! Batch runner
//!
//! Drives every record through resolve → locate résumé → upload → submit →
//! assign. A failing record is reported, its index goes to the resume
//! marker, and the batch moves on. Only reference data failures stop the run.

use std::fmt;
use std::path::PathBuf;

use colored::*;
use log::{error, info, warn};

use super::assign::assign;
use super::error::ImportError;
use super::marker::ResumeMarker;
use super::record::ApplicantRecord;
use super::reference::ReferenceData;
use super::resume::{self, MatchPolicy};
use super::submit::submit;
use super::upload::upload;
use crate::api::{HuntflowClient, RemoteId};

/// Stage a record is in, or failed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStage {
    Pending,
    Resolving,
    LocatingResume,
    Uploading,
    Submitting,
    Assigning,
    Done,
}

impl fmt::Display for RecordStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordStage::Pending => "pending",
            RecordStage::Resolving => "resolving",
            RecordStage::LocatingResume => "locating résumé",
            RecordStage::Uploading => "uploading",
            RecordStage::Submitting => "submitting",
            RecordStage::Assigning => "assigning",
            RecordStage::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a single record
#[derive(Debug, Clone)]
pub struct RecordReport {
    /// Row position in the source table; this is what the marker stores
    pub index: usize,
    pub full_name: String,
    /// Last stage reached; for failures, the stage that failed
    pub stage: RecordStage,
    pub applicant_id: Option<RemoteId>,
    pub error: Option<String>,
}

impl RecordReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of a whole batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub records: Vec<RecordReport>,
    /// Records skipped because of `start_at`
    pub skipped: usize,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.succeeded()
    }

    /// Index of the last failed record, i.e. what the marker holds
    pub fn last_failure(&self) -> Option<usize> {
        self.records
            .iter()
            .rev()
            .find(|r| !r.succeeded())
            .map(|r| r.index)
    }
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Folder holding one résumé subfolder per position
    pub resume_dir: PathBuf,
    pub match_policy: MatchPolicy,
    /// Records whose index is below this are skipped
    pub start_at: usize,
}

pub struct BatchRunner<'a> {
    client: &'a HuntflowClient,
    marker: ResumeMarker,
    options: BatchOptions,
}

impl<'a> BatchRunner<'a> {
    pub fn new(client: &'a HuntflowClient, marker: ResumeMarker, options: BatchOptions) -> Self {
        Self {
            client,
            marker,
            options,
        }
    }

    /// Import all records
    ///
    /// Returns `Err` only when the reference data cannot be loaded; in that
    /// case no record has been touched.
    pub async fn run(&self, records: Vec<ApplicantRecord>) -> Result<BatchReport, ImportError> {
        println!("{}", "Fetching reference data".cyan());
        let reference = ReferenceData::fetch(self.client).await?;

        println!("{}", "Importing applicants".cyan());
        let mut report = BatchReport::default();

        for (position, mut record) in records.into_iter().enumerate() {
            // records not read from a table are numbered by batch position
            let index = record.source_row().unwrap_or(position);
            if index < self.options.start_at {
                report.skipped += 1;
                continue;
            }

            let mut stage = RecordStage::Pending;
            match self.process(&reference, &mut record, &mut stage).await {
                Ok(applicant_id) => {
                    println!(" - \"{}\" imported", record.full_name.green());
                    report.records.push(RecordReport {
                        index,
                        full_name: record.full_name,
                        stage,
                        applicant_id: Some(applicant_id),
                        error: None,
                    });
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    println!(" - {} (record {})", "Failed to import applicant".red(), index);
                    warn!(
                        "Record {} ('{}') failed while {}: {}",
                        index, record.full_name, stage, err
                    );
                    if let Err(io_err) = self.marker.record_failure(index) {
                        error!(
                            "Could not write resume marker {}: {}",
                            self.marker.path().display(),
                            io_err
                        );
                    }
                    // set when only the assignment failed
                    let applicant_id = record.remote_applicant_id();
                    report.records.push(RecordReport {
                        index,
                        full_name: record.full_name,
                        stage,
                        applicant_id,
                        error: Some(err.to_string()),
                    });
                }
            }
        }

        if report.skipped > 0 {
            info!("Skipped the first {} records", report.skipped);
        }
        info!(
            "Batch finished: {} imported, {} failed",
            report.succeeded(),
            report.failed()
        );
        println!("{}", "Import finished".bright_green().bold());

        Ok(report)
    }

    async fn process(
        &self,
        reference: &ReferenceData,
        record: &mut ApplicantRecord,
        stage: &mut RecordStage,
    ) -> Result<RemoteId, ImportError> {
        let account_id = reference.account_id();

        *stage = RecordStage::Resolving;
        record.set_vacancy_id(reference.resolve_vacancy(&record.position)?)?;
        record.set_status_id(reference.resolve_status(&record.status_name)?)?;

        *stage = RecordStage::LocatingResume;
        let path = resume::locate(
            &record.position,
            &record.full_name,
            &self.options.resume_dir,
            self.options.match_policy,
        );
        record.set_resume_file_path(path)?;

        *stage = RecordStage::Uploading;
        let uploaded = upload(self.client, account_id, record.resume_file_path()).await?;
        record.set_uploaded(uploaded)?;

        *stage = RecordStage::Submitting;
        let applicant_id = submit(self.client, account_id, record).await?;
        record.set_remote_applicant_id(applicant_id)?;

        *stage = RecordStage::Assigning;
        let (vacancy_id, status_id) = match (record.vacancy_id(), record.status_id()) {
            (Some(vacancy), Some(status)) => (vacancy, status),
            _ => {
                return Err(ImportError::Record(
                    "vacancy and status must be resolved before assignment".to_string(),
                ));
            }
        };
        assign(
            self.client,
            account_id,
            applicant_id,
            vacancy_id,
            status_id,
            record.comment.as_deref(),
        )
        .await?;

        *stage = RecordStage::Done;
        Ok(applicant_id)
    }
}
