//! Mock CloudRunClient for unit testing
//!
//! This module provides a mock implementation of CloudRunClientTrait that can
//! be used in unit tests without requiring network access or credentials.
//!
//! The mock stores services in memory and can be configured to fail the list
//! call for testing error paths.

use crate::cloudrun_trait::CloudRunClientTrait;
use crate::error::CloudRunError;
use crate::models::Service;
use crate::selector::LabelSelector;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock CloudRunClient for testing
#[derive(Clone)]
pub struct MockCloudRunClient {
    base_url: String,
    services: Arc<Mutex<Vec<Service>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockCloudRunClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            services: Arc::new(Mutex::new(Vec::new())),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a service to the in-memory store
    pub fn add_service(&self, service: Service) {
        self.services
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(service);
    }

    /// Make the next list call fail with the given API error message
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.into());
    }
}

/// Build a service resource under the given project and region
pub fn make_service(
    project: &str,
    region: &str,
    name: &str,
    labels: &[(&str, &str)],
) -> Service {
    let labels: HashMap<String, String> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Service {
        name: format!("projects/{}/locations/{}/services/{}", project, region, name),
        uid: Some(format!("uid-{}", name)),
        generation: Some("1".to_string()),
        labels,
        annotations: HashMap::new(),
        create_time: Some("2024-01-01T00:00:00Z".to_string()),
        update_time: Some("2024-01-01T00:00:00Z".to_string()),
        creator: None,
        last_modifier: None,
        ingress: Some("INGRESS_TRAFFIC_ALL".to_string()),
        launch_stage: Some("GA".to_string()),
        uri: Some(format!("https://{}-{}.a.run.app", name, project)),
        latest_ready_revision: None,
        latest_created_revision: None,
        reconciling: false,
        conditions: Vec::new(),
    }
}

#[async_trait::async_trait]
impl CloudRunClientTrait for MockCloudRunClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_services(
        &self,
        project: &str,
        region: &str,
        selector: Option<&LabelSelector>,
    ) -> Result<Vec<Service>, CloudRunError> {
        if let Some(message) = self
            .fail_with
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            return Err(CloudRunError::Api(message));
        }

        let parent = format!("projects/{}/locations/{}/", project, region);
        let services = self
            .services
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|svc| svc.name.starts_with(&parent))
            .filter(|svc| selector.is_none_or(|s| s.matches(&svc.labels)))
            .cloned()
            .collect();

        Ok(services)
    }
}
