//! Reference data cache: account id, vacancies and statuses
//!
//! Fetched once before any record is processed and read-only afterwards.

use log::info;

use super::error::{ImportError, LookupKind};
use crate::api::{HuntflowClient, RemoteId, StatusRef, VacancyRef};

#[derive(Debug, Clone)]
pub struct ReferenceData {
    account_id: RemoteId,
    vacancies: Vec<VacancyRef>,
    statuses: Vec<StatusRef>,
}

impl ReferenceData {
    pub fn new(account_id: RemoteId, vacancies: Vec<VacancyRef>, statuses: Vec<StatusRef>) -> Self {
        Self {
            account_id,
            vacancies,
            statuses,
        }
    }

    /// Resolve the account, then load its reference lists
    pub async fn fetch(client: &HuntflowClient) -> Result<Self, ImportError> {
        let account_id =
            client
                .first_account_id()
                .await
                .map_err(|source| ImportError::ReferenceData {
                    what: "account id",
                    source,
                })?;
        Self::load(client, account_id).await
    }

    /// Load vacancies and statuses of an account
    pub async fn load(client: &HuntflowClient, account_id: RemoteId) -> Result<Self, ImportError> {
        let vacancies =
            client
                .vacancies(account_id)
                .await
                .map_err(|source| ImportError::ReferenceData {
                    what: "vacancies",
                    source,
                })?;
        let statuses = client.vacancy_statuses(account_id).await.map_err(|source| {
            ImportError::ReferenceData {
                what: "vacancy statuses",
                source,
            }
        })?;

        info!(
            "Loaded {} vacancies and {} statuses for account {}",
            vacancies.len(),
            statuses.len(),
            account_id
        );

        Ok(Self::new(account_id, vacancies, statuses))
    }

    pub fn account_id(&self) -> RemoteId {
        self.account_id
    }

    /// First vacancy whose name equals `name` exactly
    pub fn resolve_vacancy(&self, name: &str) -> Result<RemoteId, ImportError> {
        self.vacancies
            .iter()
            .find(|v| v.position == name)
            .map(|v| v.id)
            .ok_or_else(|| ImportError::LookupMiss {
                kind: LookupKind::Vacancy,
                name: name.to_string(),
            })
    }

    /// First status whose name equals `name` exactly
    pub fn resolve_status(&self, name: &str) -> Result<RemoteId, ImportError> {
        self.statuses
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.id)
            .ok_or_else(|| ImportError::LookupMiss {
                kind: LookupKind::Status,
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiContext;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample() -> ReferenceData {
        ReferenceData::new(
            1,
            vec![
                VacancyRef { id: 10, position: "Engineer".into() },
                VacancyRef { id: 11, position: "Engineer".into() },
                VacancyRef { id: 12, position: "Designer".into() },
            ],
            vec![
                StatusRef { id: 20, name: "New".into() },
                StatusRef { id: 21, name: "Interview".into() },
            ],
        )
    }

    #[test]
    fn test_first_exact_match_wins() {
        let data = sample();
        assert_eq!(data.resolve_vacancy("Engineer").unwrap(), 10);
        assert_eq!(data.resolve_vacancy("Designer").unwrap(), 12);
        assert_eq!(data.resolve_status("Interview").unwrap(), 21);
    }

    #[test]
    fn test_lookup_is_exact() {
        let data = sample();
        let err = data.resolve_vacancy("engineer").unwrap_err();
        assert!(matches!(
            err,
            ImportError::LookupMiss { kind: LookupKind::Vacancy, .. }
        ));
        assert!(data.resolve_status("New ").is_err());
    }

    #[tokio::test]
    async fn test_fetch_loads_everything_for_first_account() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": 3}]})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/account/3/vacancies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"items": [{"id": 10, "position": "Engineer", "state": "OPEN"}]}),
            ))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/account/3/vacancy/statuses"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": [{"id": 20, "name": "New", "order": 1}]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HuntflowClient::new(ApiContext::new(server.uri(), "t")).unwrap();
        let data = ReferenceData::fetch(&client).await.unwrap();
        assert_eq!(data.account_id(), 3);
        assert_eq!(data.resolve_vacancy("Engineer").unwrap(), 10);
        assert_eq!(data.resolve_status("New").unwrap(), 20);
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account/3/vacancies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let client = HuntflowClient::new(ApiContext::new(server.uri(), "t")).unwrap();
        let err = ReferenceData::load(&client, 3).await.unwrap_err();
        assert!(matches!(err, ImportError::ReferenceData { what: "vacancies", .. }));
        assert!(err.to_string().starts_with("failed to fetch vacancies"));
    }
}
