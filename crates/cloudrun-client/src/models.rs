//! Cloud Run Admin API models
//!
//! These models match the Cloud Run Admin API v2 resource representations.
//! See: https://cloud.google.com/run/docs/reference/rest/v2/projects.locations.services

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response wrapper for the services list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServicesResponse {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Service resource matching the v2 `Service` representation
///
/// Only the fields the controller reads are modelled; the API returns more.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Fully qualified name, `projects/{project}/locations/{location}/services/{service}`
    pub name: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub generation: Option<String>, // int64 serialized as a string
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    #[serde(default)]
    pub create_time: Option<String>, // RFC 3339 datetime
    #[serde(default)]
    pub update_time: Option<String>, // RFC 3339 datetime
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub last_modifier: Option<String>,
    #[serde(default)]
    pub ingress: Option<String>, // IngressTraffic enum value
    #[serde(default)]
    pub launch_stage: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub latest_ready_revision: Option<String>,
    #[serde(default)]
    pub latest_created_revision: Option<String>,
    #[serde(default)]
    pub reconciling: bool,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Service {
    /// Short service name, the last segment of the resource name
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Location segment of the resource name, if present
    pub fn location(&self) -> Option<&str> {
        let mut segments = self.name.split('/');
        while let Some(segment) = segments.next() {
            if segment == "locations" {
                return segments.next();
            }
        }
        None
    }
}

/// Condition from the v2 `Condition` representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub last_transition_time: Option<String>,
}
