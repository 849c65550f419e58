//! Compute metadata server client
//!
//! Answers ambient identity questions (am I on GCE? which project? which
//! credentials?) from the instance metadata endpoint.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Well-known host of the compute metadata server
pub const DEFAULT_METADATA_HOST: &str = "metadata.google.internal";

const METADATA_FLAVOR: &str = "Metadata-Flavor";

/// Errors from the compute metadata server
#[derive(Debug, Error)]
pub enum MetadataError {
    /// HTTP request/response error
    #[error("metadata server request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Metadata server returned an error status
    #[error("metadata server returned {status} for {path}: {body}")]
    Api {
        status: reqwest::StatusCode,
        path: String,
        body: String,
    },

    /// Metadata server returned an undecodable body
    #[error("error decoding metadata response for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// OAuth2 token minted for the instance's default service account
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Compute metadata server client
pub struct MetadataClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetadataClient {
    /// Create a client against the well-known metadata host
    ///
    /// GCE_METADATA_HOST overrides the host, matching the convention of
    /// Google's own client libraries.
    pub fn new() -> Result<Self, MetadataError> {
        let host = std::env::var("GCE_METADATA_HOST")
            .ok()
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_METADATA_HOST.to_string());
        Self::with_base_url(format!("http://{}", host))
    }

    /// Create a client against a specific endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MetadataError> {
        // The metadata endpoint is link-local; anything slower than this
        // means we are not on GCE.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(3))
            .build()
            .map_err(MetadataError::Http)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Probe whether the process is running on Google compute infrastructure
    ///
    /// Never errors: an unreachable or non-conforming endpoint means "not on
    /// GCE".
    pub async fn on_gce(&self) -> bool {
        let url = format!("{}/", self.base_url);
        match self
            .http
            .get(&url)
            .header(METADATA_FLAVOR, "Google")
            .send()
            .await
        {
            Ok(response) => response
                .headers()
                .get(METADATA_FLAVOR)
                .is_some_and(|flavor| flavor == "Google"),
            Err(err) => {
                debug!(error = %err, "metadata server probe failed");
                false
            }
        }
    }

    /// Project ID of the instance's project
    pub async fn project_id(&self) -> Result<String, MetadataError> {
        let body = self.get_text("/computeMetadata/v1/project/project-id").await?;
        Ok(body.trim().to_string())
    }

    /// Access token for the instance's default service account
    pub async fn access_token(&self) -> Result<AccessToken, MetadataError> {
        let path = "/computeMetadata/v1/instance/service-accounts/default/token";
        let body = self.get_text(path).await?;
        serde_json::from_str(&body).map_err(|source| MetadataError::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn get_text(&self, path: &str) -> Result<String, MetadataError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(path = %path, "querying metadata server");

        let response = self
            .http
            .get(&url)
            .header(METADATA_FLAVOR, "Google")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::Api {
                status,
                path: path.to_string(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
