//! Cloud Run Admin API Client
//!
//! A Rust client library for the Cloud Run Admin API v2, covering the
//! read-only service listing the autoneg controller needs.
//!
//! # Example
//!
//! ```no_run
//! use cloudrun_client::{CloudRunClient, LabelSelector};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client with an ambient access token
//! let client = CloudRunClient::new("ya29.token".to_string())?;
//!
//! // List services in a region, filtered by labels
//! let selector: LabelSelector = "app=frontend".parse()?;
//! let services = client
//!     .list_services("my-project", "europe-west1", Some(&selector))
//!     .await?;
//!
//! for service in services {
//!     println!("{}", service.short_name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Service listing**: one-shot list of a project region's services
//! - **Label selectors**: client-side `key=value` filtering
//! - **Mocking**: `CloudRunClientTrait` plus an in-memory mock behind the
//!   `test-util` feature

pub mod client;
pub mod error;
pub mod models;
pub mod selector;
#[path = "trait.rs"]
pub mod cloudrun_trait;
#[cfg(feature = "test-util")]
pub mod mock;


pub use client::{CloudRunClient, DEFAULT_BASE_URL};
pub use cloudrun_trait::CloudRunClientTrait;
pub use error::CloudRunError;
pub use models::{Condition, ListServicesResponse, Service};
pub use selector::LabelSelector;
#[cfg(feature = "test-util")]
pub use mock::{make_service, MockCloudRunClient};
