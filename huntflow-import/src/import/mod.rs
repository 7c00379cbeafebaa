//! Applicant import pipeline
//!
//! Per record: resolve vacancy/status ids, find the résumé, upload it, create
//! the applicant, then put it on the vacancy. Re-running the same input
//! creates duplicate applicants; nothing is deduplicated.

pub mod assign;
pub mod error;
pub mod marker;
pub mod record;
pub mod reference;
pub mod resume;
pub mod runner;
pub mod submit;
pub mod upload;

pub use error::{ImportError, LookupKind};
pub use marker::{DEFAULT_MARKER_FILE, ResumeMarker};
pub use record::{ApplicantRecord, ColumnNames, records_from_rows};
pub use reference::ReferenceData;
pub use resume::MatchPolicy;
pub use runner::{BatchOptions, BatchReport, BatchRunner, RecordReport, RecordStage};
pub use upload::UploadedFile;
