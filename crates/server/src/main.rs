mod api;
mod app_config;
mod cli;
mod router;
mod state;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use utoipa::OpenApi;

use crate::cli::{CliArgs, Command};
use crate::state::AppState;

async fn serve(config: &awards_core::Config) -> anyhow::Result<()> {
    config.log_summary();

    // Load fully before binding so no request ever sees a partial table.
    let table = app_config::load_table(&config.dataset)?;
    let app = router::build_router(Arc::new(AppState::new(table)));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn report(config: &awards_core::Config) -> anyhow::Result<()> {
    let table = app_config::load_table(&config.dataset)?;
    println!("{}", api::report_json(&table)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let config = app_config::load_config();

    match args.into_command() {
        Command::Serve { dataset } => {
            let config = app_config::with_dataset_override(config, dataset);
            config.validate()?;
            serve(&config).await?;
        }
        Command::Report { dataset } => {
            let config = app_config::with_dataset_override(config, dataset);
            config.validate()?;
            report(&config)?;
        }
        Command::Openapi => {
            println!("{}", api::doc::ApiDoc::openapi().to_pretty_json()?);
        }
    }

    Ok(())
}
