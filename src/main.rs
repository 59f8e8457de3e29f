mod analysis;
mod app;
mod cli;
mod config;
mod error;
mod session;
mod utils;

use analysis::AnalysisClient;
use anyhow::{anyhow, Result};
use app::HairstyleAdvisor;
use clap::Parser;
use cli::Cli;
use config::{Config, SERVICE_URL_ENV};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "hairstyle_advisor=debug,info"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(std::env::var(SERVICE_URL_ENV).ok(), cli.service_url);
    if cli.save_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::config_path()?,
        };
        config.save(&path)?;
        info!(path = %path.display(), "config saved");
    }
    info!(
        service_url = %config.service_url,
        timeout_seconds = config.timeout_seconds,
        "starting Hairstyle Advisor v{}",
        env!("CARGO_PKG_VERSION")
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let client = AnalysisClient::new(&config)?;
    info!(endpoint = client.endpoint(), "analysis client ready");
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([640.0, 760.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hairstyle Advisor",
        options,
        Box::new(move |cc| Box::new(HairstyleAdvisor::new(cc, &config, client, handle))),
    )
    .map_err(|e| anyhow!("failed to open window: {}", e))?;

    info!("window closed");
    Ok(())
}
