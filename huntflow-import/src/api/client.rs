//! HTTP client for the Huntflow API
//!
//! Every call goes through one [`HuntflowClient`] that carries the immutable
//! request context (base URL, bearer token, user agent). Calls are plain
//! request/response; nothing is retried.

use std::path::Path;
use std::time::Duration;

use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::models::{
    Account, ApplicantPayload, CreatedApplicant, ItemList, RemoteId, StatusRef, UploadResponse,
    VacancyAssignment, VacancyRef,
};

/// Default API host when not overridden via configuration
pub const DEFAULT_API_URL: &str = "https://dev-100-api.huntflow.ru";

/// Default User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "App/1.0 (incaseoffire@example.com)";

/// Header asking the server to parse an uploaded document
const FILE_PARSE_HEADER: &str = "X-File-Parse";

/// Process-wide request settings shared by all API calls
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub base_url: String,
    pub token: String,
    pub user_agent: String,
    /// Request timeout; `None` keeps the reqwest default
    pub timeout: Option<Duration>,
}

impl ApiContext {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Huntflow API client
#[derive(Debug, Clone)]
pub struct HuntflowClient {
    http: Client,
    context: ApiContext,
}

impl HuntflowClient {
    /// Create a new client from the given context
    pub fn new(context: ApiContext) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(context.user_agent.clone());
        if let Some(timeout) = context.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, context })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.context.base_url.trim_end_matches('/'), path)
    }

    /// Id of the first account available to the token
    pub async fn first_account_id(&self) -> Result<RemoteId, ApiError> {
        let accounts: ItemList<Account> = self.get_json("/accounts").await?;
        let account = accounts
            .items
            .first()
            .ok_or_else(|| ApiError::Decode("account list is empty".to_string()))?;

        debug!(
            "Using account {} ({})",
            account.id,
            account.name.as_deref().unwrap_or("unnamed")
        );
        Ok(account.id)
    }

    pub async fn vacancies(&self, account_id: RemoteId) -> Result<Vec<VacancyRef>, ApiError> {
        let list: ItemList<VacancyRef> = self
            .get_json(&format!("/account/{}/vacancies", account_id))
            .await?;
        Ok(list.items)
    }

    pub async fn vacancy_statuses(&self, account_id: RemoteId) -> Result<Vec<StatusRef>, ApiError> {
        let list: ItemList<StatusRef> = self
            .get_json(&format!("/account/{}/vacancy/statuses", account_id))
            .await?;
        Ok(list.items)
    }

    /// Upload a file with document parsing enabled
    ///
    /// Only `200 OK` counts as success for this endpoint.
    pub async fn upload_file(
        &self,
        account_id: RemoteId,
        path: &Path,
    ) -> Result<UploadResponse, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());

        debug!("Uploading {} ({} bytes)", path.display(), bytes.len());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let response = self
            .http
            .post(self.url(&format!("/account/{}/upload", account_id)))
            .bearer_auth(&self.context.token)
            .header(FILE_PARSE_HEADER, "true")
            .multipart(form)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Self::status_error(response).await);
        }
        Self::decode(response).await
    }

    pub async fn create_applicant(
        &self,
        account_id: RemoteId,
        payload: &ApplicantPayload,
    ) -> Result<CreatedApplicant, ApiError> {
        self.post_json(&format!("/account/{}/applicants", account_id), payload)
            .await
    }

    /// Attach an existing applicant to a vacancy with a status
    pub async fn add_to_vacancy(
        &self,
        account_id: RemoteId,
        applicant_id: RemoteId,
        assignment: &VacancyAssignment,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(&format!(
                "/account/{}/applicants/{}/vacancy",
                account_id, applicant_id
            )))
            .bearer_auth(&self.context.token)
            .json(assignment)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.context.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.context.token)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        Self::decode(response).await
    }

    async fn status_error(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ApiError::Status { status, body }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(format!("{}: {}", err, body)))
    }
}
