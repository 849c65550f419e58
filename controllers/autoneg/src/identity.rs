//! Ambient identity resolution
//!
//! The project ID and API credentials come from the compute metadata server
//! when the process runs on GCE, and from the local gcloud installation
//! otherwise.

use crate::gcloud::{GcloudCli, GcloudError};
use crate::metadata::{MetadataClient, MetadataError};
use thiserror::Error;
use tracing::debug;

/// Errors from resolving the ambient project or credentials
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Metadata server lookup failed while running on GCE
    #[error("error when reading from the compute metadata server: {0}")]
    Metadata(#[source] MetadataError),

    /// gcloud fallback failed
    #[error(transparent)]
    Gcloud(#[from] GcloudError),
}

/// Determine the project this process should operate on
///
/// On GCE the metadata server answers authoritatively and gcloud is never
/// consulted; elsewhere the locally configured `core/project` value is used.
pub async fn detect_project_id(
    metadata: &MetadataClient,
    gcloud: &GcloudCli,
) -> Result<String, IdentityError> {
    if metadata.on_gce().await {
        debug!("trying the compute metadata server for the project ID");
        let project = metadata
            .project_id()
            .await
            .map_err(IdentityError::Metadata)?;
        debug!("found the project ID on the metadata server");
        return Ok(project);
    }

    debug!("not running on GCE, asking gcloud for core/project");
    let project = gcloud.config_get_value("core/project").await?;
    debug!("found the project ID via gcloud");
    Ok(project)
}

/// Obtain an access token for the ambient identity, following the same
/// probe order as `detect_project_id`
pub async fn detect_access_token(
    metadata: &MetadataClient,
    gcloud: &GcloudCli,
) -> Result<String, IdentityError> {
    if metadata.on_gce().await {
        debug!("minting an access token from the metadata server");
        let token = metadata
            .access_token()
            .await
            .map_err(IdentityError::Metadata)?;
        return Ok(token.access_token);
    }

    debug!("not running on GCE, asking gcloud for an access token");
    let token = gcloud.print_access_token().await?;
    Ok(token)
}
