//! Huntflow Web API
//!
//! Typed client for the handful of endpoints the importer uses: accounts,
//! reference lists, file upload, applicant creation and vacancy assignment.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiContext, DEFAULT_API_URL, DEFAULT_USER_AGENT, HuntflowClient};
pub use error::ApiError;
pub use models::{
    ApplicantPayload, External, FileRef, RemoteId, StatusRef, UploadResponse, VacancyAssignment,
    VacancyRef,
};
