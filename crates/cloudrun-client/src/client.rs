//! Cloud Run API client
//!
//! Implements the Cloud Run Admin API v2 services list call.
//! Based on the v2 REST structure: /v2/projects/{project}/locations/{location}/services

use crate::cloudrun_trait::CloudRunClientTrait;
use crate::error::CloudRunError;
use crate::models::{ListServicesResponse, Service};
use crate::selector::LabelSelector;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Production endpoint of the Cloud Run Admin API
pub const DEFAULT_BASE_URL: &str = "https://run.googleapis.com";

/// Cloud Run Admin API client
pub struct CloudRunClient {
    client: Client,
    base_url: String,
    token: String,
}

impl CloudRunClient {
    /// Create a new Cloud Run client against the production endpoint
    ///
    /// # Arguments
    /// * `token` - OAuth2 access token for the ambient identity
    pub fn new(token: String) -> Result<Self, CloudRunError> {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Create a client against a specific endpoint (used by tests)
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: String,
    ) -> Result<Self, CloudRunError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(CloudRunError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the services of a project region, filtered by a label selector
    ///
    /// A single request/response round trip: no retries, and only the first
    /// page is fetched. The selector, when present, is applied client-side.
    pub async fn list_services(
        &self,
        project: &str,
        region: &str,
        selector: Option<&LabelSelector>,
    ) -> Result<Vec<Service>, CloudRunError> {
        let parent = format!("projects/{}/locations/{}", project, region);
        let url = format!("{}/v2/{}/services", self.base_url, parent);
        let selector_text = selector.map(ToString::to_string).unwrap_or_default();

        debug!(
            region = %region,
            label_selector = %selector_text,
            "querying Cloud Run services"
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(CloudRunError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CloudRunError::Api(format!(
                "failed to list services with label selector {:?} in region {:?}: {} - {}",
                selector_text, region, status, body
            )));
        }

        let response_text = response.text().await?;
        let page: ListServicesResponse = serde_json::from_str(&response_text).map_err(|e| {
            CloudRunError::Api(format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                response_text.chars().take(500).collect::<String>()
            ))
        })?;

        if page
            .next_page_token
            .as_deref()
            .is_some_and(|t| !t.is_empty())
        {
            debug!("additional result pages available, only the first page is fetched");
        }

        let services = match selector {
            Some(selector) if !selector.is_empty() => page
                .services
                .into_iter()
                .filter(|svc| selector.matches(&svc.labels))
                .collect(),
            _ => page.services,
        };

        debug!(n = services.len(), "finished retrieving services from the API");
        Ok(services)
    }
}

#[async_trait::async_trait]
impl CloudRunClientTrait for CloudRunClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn list_services(
        &self,
        project: &str,
        region: &str,
        selector: Option<&LabelSelector>,
    ) -> Result<Vec<Service>, CloudRunError> {
        CloudRunClient::list_services(self, project, region, selector).await
    }
}
