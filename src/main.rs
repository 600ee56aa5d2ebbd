//! VPC Topology Builder - Plan Entry Point
//!
//! Loads a topology request from configuration, builds it against an
//! in-memory provisioner and prints the resulting plan as JSON.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vpc_topology_builder::infrastructure::driven_adapters::config::{AppConfig, LogConfig, LogFormat};
use vpc_topology_builder::infrastructure::driving_adapters::plan::PlanHandler;
use vpc_topology_builder::shared::errors::AppError;

const DEFAULT_LOG_FILTER: &str = "vpc_topology_builder=info";

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            return ExitCode::from(AppError::from(err).exit_code());
        }
    };

    // Initialize tracing
    init_tracing(&config.log);
    tracing::info!("Configuration loaded successfully");

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = err.error_code(), error = %err, "Planning failed");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    let handler = PlanHandler::new(config.output);

    let report = handler.plan(config.topology).await?;
    tracing::info!(
        vpc_id = %report.vpc_id,
        resources = report.resource_counts.values().sum::<usize>(),
        "Plan generated"
    );

    println!("{}", handler.render(&report)?);
    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        log.filter
            .as_deref()
            .unwrap_or(DEFAULT_LOG_FILTER)
            .into()
    });

    // Logs go to stderr so stdout carries only the plan.
    let registry = tracing_subscriber::registry().with(filter);
    match log.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
