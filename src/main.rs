mod check;
mod config;
mod constants;
mod probe;


use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};

use crate::check::verify;
use crate::config::Config;
use crate::probe::Prober;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webserver_smoke=info".into()),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("smoke check failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let prober = Prober::new(config.request_timeout)?;

    info!("fetching {}", config.target_url);
    let page = prober.fetch(&config.target_url).await?;

    verify(&page, config.expected_status, &config.expected_snippet)?;
    info!(
        status = page.status,
        body_bytes = page.body.len(),
        "smoke check passed"
    );
    Ok(())
}
