//! Autoneg Controller
//!
//! Bootstrap for the controller that reconciles Cloud Run service backends
//! into negotiated-endpoint-group load-balancer configuration.
//!
//! Only the startup path exists so far: configuration, logging, ambient
//! identity resolution, and a single read-only listing of the Cloud Run
//! services the future reconcile loop will manage.

mod config;
mod error;
mod gcloud;
mod identity;
mod logging;
mod metadata;

mod config_test;
mod main_test;
mod metadata_test;

use crate::config::Config;
use crate::error::ControllerError;
use crate::gcloud::GcloudCli;
use crate::metadata::MetadataClient;
use clap::Parser;
use cloudrun_client::{CloudRunClient, CloudRunClientTrait, LabelSelector, Service};
use tracing::{debug, error, info, info_span, Instrument};

#[tokio::main]
async fn main() {
    let config = Config::parse();
    logging::init(config.verbosity);

    let service = logging::service_name();
    let span = info_span!("autoneg", service = %service);

    if let Err(err) = run(config).instrument(span).await {
        error!(error = %err, "controller startup failed");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), ControllerError> {
    info!("starting autoneg controller");
    debug!(http_addr = %config.http_addr, "listen address configured");
    // TODO: serve health and readiness probes on http_addr once the reconcile loop lands

    let metadata = MetadataClient::new()?;
    let gcloud = GcloudCli::new();

    let project = match config.explicit_project() {
        Some(project) => project.to_string(),
        None => {
            info!("--project not specified, trying to autodetect one");
            let project = identity::detect_project_id(&metadata, &gcloud)
                .await
                .map_err(ControllerError::ProjectDetection)?;
            info!(project = %project, "project detected");
            project
        }
    };

    let token = identity::detect_access_token(&metadata, &gcloud)
        .await
        .map_err(ControllerError::Credentials)?;

    let client = CloudRunClient::new(token)?;
    let services = fetch_services(
        &client,
        &project,
        &config.region,
        config.label_selector.as_ref(),
    )
    .await?;

    for service in &services {
        debug!(name = %service.short_name(), uri = ?service.uri, "matched service");
    }

    Ok(())
}

/// List the region's services once and report the match count
async fn fetch_services(
    client: &impl CloudRunClientTrait,
    project: &str,
    region: &str,
    selector: Option<&LabelSelector>,
) -> Result<Vec<Service>, ControllerError> {
    let services = client.list_services(project, region, selector).await?;
    info!(
        n = services.len(),
        region = %region,
        "retrieved Cloud Run services"
    );
    Ok(services)
}
