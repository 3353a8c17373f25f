use crate::{Result as TenantResult, TenantConfigSource, TenantError};

use async_trait::async_trait;
use hp_core::TenantConfig;
use log::debug;
use reqwest::Client as ReqwestClient;
use url::Url;

const RETRIEVE_SEGMENT: &str = "retrieve";

/// HTTP client for the tenant configuration API.
///
/// One request per call: `GET {host}/retrieve/{org}` with the organization id
/// percent-encoded as a single path segment.
#[derive(Debug, Clone)]
pub struct TenantApiClient {
    base_url: Url,
    client: ReqwestClient,
}

impl TenantApiClient {
    /// # Arguments
    /// * `host` - API base URL (e.g., "https://builder.example.com")
    pub fn new(host: &str) -> TenantResult<Self> {
        let base_url = Url::parse(host.trim_end_matches('/'))
            .map_err(|e| TenantError::url(format!("'{host}': {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(TenantError::url(format!("'{host}' cannot be a base URL")));
        }

        Ok(Self {
            base_url,
            client: ReqwestClient::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the configuration document for `org_id`.
    pub fn retrieve_url(&self, org_id: &str) -> TenantResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TenantError::url(format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .push(RETRIEVE_SEGMENT)
            .push(org_id);
        Ok(url)
    }

    /// Fetch and parse the tenant configuration for `org_id`.
    pub async fn retrieve(&self, org_id: &str) -> TenantResult<TenantConfig> {
        let url = self.retrieve_url(org_id)?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(TenantError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TenantError::status(status.as_u16(), url.as_str()));
        }

        let body = response.bytes().await.map_err(TenantError::from_reqwest)?;
        TenantConfig::from_slice(&body).map_err(TenantError::from_core)
    }
}

#[async_trait]
impl TenantConfigSource for TenantApiClient {
    async fn fetch(&self, org_id: &str) -> TenantResult<TenantConfig> {
        self.retrieve(org_id).await
    }
}
