use crate::app_config::AppConfig;
use crate::args::Args;
use crate::attribute_registry::AttributeRegistry;
use crate::collector::Collector;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

mod app_config;
mod args;
mod attribute_registry;
mod collector;
mod domain;
mod exposition;
mod hubitat;
mod server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy())
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = AppConfig::load(&args).inspect_err(|e| error!("❌ {}", e))?;
    info!("✅  Loaded configuration");

    let registry = Arc::new(AttributeRegistry::new(config.label_schema()));
    info!("✅  Registered {} known attribute(s), labels {:?}", registry.len(), config.label_schema());

    let client = hubitat::new_client(&config)?;
    let collector = Arc::new(Collector::new(client, &config, registry));
    info!("✅  Collecting from {}", collector.hubitat_address());

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    server::serve(config.listen_address(), collector)
        .await
        .inspect_err(|e| error!("❌ Unable to serve metrics on {}: {}", config.listen_address(), e))?;

    Ok(())
}
