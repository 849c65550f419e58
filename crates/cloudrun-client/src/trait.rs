//! CloudRunClient trait for mocking
//!
//! This trait abstracts the CloudRunClient to enable mocking in unit tests.
//! The concrete CloudRunClient implements this trait, and tests can use mock
//! implementations.

use crate::error::CloudRunError;
use crate::models::Service;
use crate::selector::LabelSelector;

/// Trait for Cloud Run Admin API client operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait CloudRunClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// List the services of a project region, filtered by a label selector
    async fn list_services(
        &self,
        project: &str,
        region: &str,
        selector: Option<&LabelSelector>,
    ) -> Result<Vec<Service>, CloudRunError>;
}
