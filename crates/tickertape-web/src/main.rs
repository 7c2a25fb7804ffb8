use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tickertape_core::{AlphaVantageFetcher, ReqwestHttpClient};
use tickertape_web::cli::Cli;
use tickertape_web::{app, AppState, WebError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "tickertape stopped");
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), WebError> {
    let addr = cli.socket_addr()?;
    let config = cli.provider_config();
    if config.api_key.is_none() {
        tracing::warn!("ALPHA_VANTAGE_API_KEY is not set; stock requests will fail");
    }

    let http_client = Arc::new(ReqwestHttpClient::new());
    let fetcher = AlphaVantageFetcher::new(config, http_client.clone());
    let state = AppState::new(
        Arc::new(fetcher),
        http_client,
        cli.proxy_endpoint()?,
        cli.symbol.clone(),
    )?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("tickertape listening on http://{addr}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
