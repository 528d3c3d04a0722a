//! HTTP access to the case endpoints.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::CaseId,
    protocol::{Case, UpdateCaseRequest, UpdateCaseResponse},
};
use tracing::debug;
use url::Url;

use crate::error::{CaseApiError, FetchError, TransportError};

pub mod endpoints {
    use shared::domain::CaseId;

    pub const PENDING_CASES: &str = "/pending_cases";
    pub const MY_TAKEN_CASES: &str = "/my_taken_cases";
    pub const ALL_CASES: &str = "/all_cases";

    pub fn update_taken_case(case_id: CaseId) -> String {
        format!("/update_taken_case/{case_id}")
    }
}

#[async_trait]
pub trait CaseApi: Send + Sync {
    /// One-shot GET of a case list. No retry, no caching.
    async fn fetch_cases(&self, url: &str) -> Result<Vec<Case>, CaseApiError>;

    /// Posts a status change. The body is decoded whatever the HTTP status,
    /// since the server reports rejections as `{error}` payloads.
    async fn update_case(
        &self,
        case_id: CaseId,
        request: &UpdateCaseRequest,
    ) -> Result<UpdateCaseResponse, TransportError>;
}

pub struct HttpCaseApi {
    http: Client,
    base_url: Url,
}

impl HttpCaseApi {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::with_client(Client::new(), Url::parse(base_url)?))
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, url: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(url)
    }
}

#[async_trait]
impl CaseApi for HttpCaseApi {
    async fn fetch_cases(&self, url: &str) -> Result<Vec<Case>, CaseApiError> {
        let url = self.resolve(url)?;
        debug!(%url, "fetching cases");
        let res = self.http.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError { status }.into());
        }
        Ok(res.json().await?)
    }

    async fn update_case(
        &self,
        case_id: CaseId,
        request: &UpdateCaseRequest,
    ) -> Result<UpdateCaseResponse, TransportError> {
        let url = self.resolve(&endpoints::update_taken_case(case_id))?;
        debug!(case_id = case_id.0, status = %request.status, "posting case update");
        let res = self.http.post(url).json(request).send().await?;
        Ok(res.json().await?)
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
