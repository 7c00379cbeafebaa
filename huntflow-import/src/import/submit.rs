//! Applicant creation

use log::debug;

use super::error::ImportError;
use super::record::ApplicantRecord;
use crate::api::{ApplicantPayload, External, FileRef, HuntflowClient, RemoteId};

/// Name split into the three slots Huntflow expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

/// Split "Last First [Middle]" on whitespace
///
/// The middle name is only filled when there are exactly three tokens; any
/// other count of two or more leaves it empty. Fewer than two tokens is an
/// error.
pub fn split_full_name(full_name: &str) -> Result<NameParts, ImportError> {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(ImportError::InvalidName(full_name.to_string()));
    }

    let middle_name = if tokens.len() == 3 { tokens[2] } else { "" };

    Ok(NameParts {
        last_name: tokens[0].to_string(),
        first_name: tokens[1].to_string(),
        middle_name: middle_name.to_string(),
    })
}

pub fn build_payload(record: &ApplicantRecord) -> Result<ApplicantPayload, ImportError> {
    let name = split_full_name(&record.full_name)?;

    let externals = match record.uploaded_file_id() {
        Some(id) => vec![External {
            files: vec![FileRef { id }],
        }],
        None => Vec::new(),
    };

    Ok(ApplicantPayload {
        last_name: name.last_name,
        first_name: name.first_name,
        middle_name: name.middle_name,
        position: record.position.clone(),
        money: record.salary_expectation.clone(),
        photo: record.uploaded_photo_id(),
        externals,
    })
}

/// Create the applicant and return its remote id
pub async fn submit(
    client: &HuntflowClient,
    account_id: RemoteId,
    record: &ApplicantRecord,
) -> Result<RemoteId, ImportError> {
    let payload = build_payload(record)?;
    let created = client
        .create_applicant(account_id, &payload)
        .await
        .map_err(ImportError::Submission)?;

    debug!("Created applicant {} for '{}'", created.id, record.full_name);
    Ok(created.id)
}
