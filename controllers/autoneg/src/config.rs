//! Controller configuration
//!
//! All knobs arrive as command-line flags with environment-derived defaults
//! and are parsed once into an immutable `Config`. Positional arguments are
//! rejected at parse time.

use clap::Parser;
use cloudrun_client::LabelSelector;
use std::env;
use tracing::Level;

/// Command-line configuration for the autoneg controller
#[derive(Debug, Parser)]
#[command(
    name = "autoneg-controller",
    about = "Reconciles Cloud Run service backends into negotiated endpoint groups",
    version
)]
pub struct Config {
    /// The logging level (e.g. debug)
    #[arg(long, default_value = "info", value_parser = parse_level)]
    pub verbosity: Level,

    /// Address where to listen to http requests (e.g. :8080)
    #[arg(long = "http-addr", default_value_t = default_http_addr())]
    pub http_addr: String,

    /// Project in which the services are deployed
    #[arg(long)]
    pub project: Option<String>,

    /// Region whose services are listed
    #[arg(long, default_value = "europe-west1")]
    pub region: String,

    /// Label selector restricting the services considered (e.g. app=frontend,env=prod)
    #[arg(long = "label-selector", value_parser = parse_selector)]
    pub label_selector: Option<LabelSelector>,
}

impl Config {
    /// Explicitly supplied project, treating an empty value as absent
    pub fn explicit_project(&self) -> Option<&str> {
        self.project.as_deref().filter(|project| !project.is_empty())
    }
}

fn parse_level(value: &str) -> Result<Level, String> {
    value
        .parse()
        .map_err(|_| format!("unknown logging level {:?}", value))
}

fn parse_selector(value: &str) -> Result<LabelSelector, String> {
    value
        .parse::<LabelSelector>()
        .map_err(|e| e.to_string())
}

fn default_http_addr() -> String {
    http_addr_from_port(env::var("PORT").ok())
}

/// Derive the default listen address from an optional PORT value
pub(crate) fn http_addr_from_port(port: Option<String>) -> String {
    match port {
        Some(port) if !port.is_empty() => format!(":{}", port),
        _ => ":8080".to_string(),
    }
}
