//! Entry point for the `oop-tour` walkthrough.
//!
//! Log records go to stderr so stdout only carries the walkthrough lines.

use std::process::ExitCode;

use oop_tour::config::{DemoConfig, LogFormat};
use oop_tour::demo;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let loaded = DemoConfig::from_env();
    let log_format = loaded
        .as_ref()
        .map_or(LogFormat::default(), |config| config.log_format);
    init_tracing(log_format);

    let config = match loaded {
        Ok(config) => {
            tracing::info!(
                owner = %config.owner,
                deposit = %config.deposit,
                withdrawal = %config.withdrawal,
                "Configuration loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            DemoConfig::default()
        }
    };

    match demo::run(&config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Walkthrough aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,oop_tour=debug".into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init(),
    }
}
