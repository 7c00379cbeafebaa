//! Vacancy pipeline assignment

use log::debug;

use super::error::ImportError;
use crate::api::{HuntflowClient, RemoteId, VacancyAssignment};

/// Put an existing applicant on a vacancy with the given status
///
/// A failure leaves the applicant created but outside any pipeline.
pub async fn assign(
    client: &HuntflowClient,
    account_id: RemoteId,
    applicant_id: RemoteId,
    vacancy_id: RemoteId,
    status_id: RemoteId,
    comment: Option<&str>,
) -> Result<(), ImportError> {
    let assignment = VacancyAssignment {
        vacancy: vacancy_id,
        status: status_id,
        comment: comment.map(str::to_string),
    };

    client
        .add_to_vacancy(account_id, applicant_id, &assignment)
        .await
        .map_err(ImportError::Assignment)?;

    debug!(
        "Applicant {} assigned to vacancy {} with status {}",
        applicant_id, vacancy_id, status_id
    );
    Ok(())
}
