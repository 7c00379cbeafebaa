//! Huntflow API request and response bodies

use serde::{Deserialize, Serialize};

/// Remote identifier of any Huntflow object
pub type RemoteId = u64;

/// Paged list wrapper used by the list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

/// Account the token has access to
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: RemoteId,
    #[serde(default)]
    pub name: Option<String>,
}

/// Vacancy as returned by `/account/{id}/vacancies`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VacancyRef {
    pub id: RemoteId,
    /// Vacancy name, matched against the applicant's position
    pub position: String,
}

/// Pipeline status as returned by `/account/{id}/vacancy/statuses`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusRef {
    pub id: RemoteId,
    pub name: String,
}

/// Result of uploading a résumé with document parsing enabled
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub id: RemoteId,
    /// Photo extracted from the document, if the parser found one
    #[serde(default)]
    pub photo: Option<PhotoRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoRef {
    pub id: RemoteId,
}

/// Body of `POST /account/{id}/applicants`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantPayload {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub position: String,
    pub money: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<RemoteId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub externals: Vec<External>,
}

/// Attachment block of an applicant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct External {
    pub files: Vec<FileRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRef {
    pub id: RemoteId,
}

/// Minimal view of a created applicant
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedApplicant {
    pub id: RemoteId,
}

/// Body of `POST /account/{id}/applicants/{applicant_id}/vacancy`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancyAssignment {
    pub vacancy: RemoteId,
    pub status: RemoteId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upload_response_photo_variants() {
        let with_photo: UploadResponse =
            serde_json::from_value(json!({"id": 5, "photo": {"id": 6}})).unwrap();
        assert_eq!(with_photo.photo.map(|p| p.id), Some(6));

        let null_photo: UploadResponse =
            serde_json::from_value(json!({"id": 5, "photo": null})).unwrap();
        assert!(null_photo.photo.is_none());

        let no_photo: UploadResponse = serde_json::from_value(json!({"id": 5})).unwrap();
        assert!(no_photo.photo.is_none());
    }

    #[test]
    fn test_payload_omits_empty_attachments() {
        let payload = ApplicantPayload {
            last_name: "Ivanov".into(),
            first_name: "Ivan".into(),
            middle_name: String::new(),
            position: "Engineer".into(),
            money: "100000".into(),
            photo: None,
            externals: Vec::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("photo").is_none());
        assert!(value.get("externals").is_none());
        assert_eq!(value["middle_name"], "");
    }

    #[test]
    fn test_assignment_comment_is_optional() {
        let assignment = VacancyAssignment {
            vacancy: 1,
            status: 2,
            comment: None,
        };
        assert_eq!(
            serde_json::to_value(&assignment).unwrap(),
            json!({"vacancy": 1, "status": 2})
        );
    }
}
