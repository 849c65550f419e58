//! Controller-specific error types.
//!
//! This module defines the errors that abort controller startup; `main`
//! maps any of them to a fatal log line and a non-zero exit.

use crate::identity::IdentityError;
use crate::metadata::MetadataError;
use cloudrun_client::CloudRunError;
use thiserror::Error;

/// Errors that can occur in the autoneg controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Metadata client could not be constructed
    #[error("failed to initialize the metadata client: {0}")]
    Metadata(#[from] MetadataError),

    /// Project autodetection failed
    #[error("failed to detect project, must specify one with --project: {0}")]
    ProjectDetection(#[source] IdentityError),

    /// Ambient credential resolution failed
    #[error("failed to obtain Google Cloud credentials: {0}")]
    Credentials(#[source] IdentityError),

    /// Cloud Run API error
    #[error("Cloud Run error: {0}")]
    CloudRun(#[from] CloudRunError),
}
