//! HTTP client for the profile API

use async_trait::async_trait;
use folio_common::{Profile, Project, SearchResultSet};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::ApiError;

pub const PROFILE_PATH: &str = "/api/profile";
pub const PROJECTS_PATH: &str = "/api/profile/projects";
pub const SEARCH_PATH: &str = "/api/profile/search";

/// Read-only access to the profile API.
///
/// The controller holds this as `Arc<dyn ProfileSource>`, so tests can swap in
/// an in-memory source.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// `GET /api/profile`
    async fn fetch_profile(&self) -> Result<Profile, ApiError>;

    /// `GET /api/profile/projects?skill=<skill>`
    async fn fetch_projects_by_skill(&self, skill: &str) -> Result<Vec<Project>, ApiError>;

    /// `GET /api/profile/search?q=<query>`
    async fn search(&self, query: &str) -> Result<SearchResultSet, ApiError>;
}

/// [`ProfileSource`] backed by `reqwest`.
///
/// # Example
///
/// ```rust,no_run
/// use folio::api::{ApiClient, ProfileSource};
/// use folio::config::ApiConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ApiConfig::new("http://localhost:5000")?)?;
/// let profile = client.fetch_profile().await?;
/// let rust_projects = client.fetch_projects_by_skill("Rust").await?;
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
}

impl ApiClient {
    /// Create a new client for `config.base_url`.
    ///
    /// # Errors
    /// Returns [`ApiError::Network`] if the TLS backend cannot be initialized.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    /// Issue one GET and decode the body. Any non-2xx status is an error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<(&str, &str)>,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);

        let mut request = self.client.get(&url);
        if let Some(pair) = query {
            // reqwest form-encodes the value, so `C++` and `a&b` survive intact
            request = request.query(&[pair]);
        }

        debug!("GET {url} {query:?}");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), url });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }
}

#[async_trait]
impl ProfileSource for ApiClient {
    async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.get_json(PROFILE_PATH, None).await
    }

    async fn fetch_projects_by_skill(&self, skill: &str) -> Result<Vec<Project>, ApiError> {
        self.get_json(PROJECTS_PATH, Some(("skill", skill))).await
    }

    async fn search(&self, query: &str) -> Result<SearchResultSet, ApiError> {
        self.get_json(SEARCH_PATH, Some(("q", query))).await
    }
}
