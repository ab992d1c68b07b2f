mod business_logic;
mod errors;
mod models;
mod services;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use validator::Validate;

use crate::business_logic::config::ScanConfig;
use crate::errors::ScanError;
use crate::services::mexc::MexcClient;
use crate::services::notifier::{Notifier, NotifyOutcome};
use crate::services::scanner::Scanner;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flipscan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // One scan per invocation; an external trigger owns recurrence.
    // Failures end the run with a logged message, not a stack trace.
    if let Err(error) = run().await {
        tracing::error!("scan failed: {:#}", error);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let webhook_url = std::env::var("WEBHOOK_URL").ok();
    if webhook_url.is_none() {
        tracing::warn!("WEBHOOK_URL not set, alerts will not be delivered");
    }

    let config = ScanConfig::default();
    config
        .validate()
        .map_err(ScanError::from)
        .context("invalid scan configuration")?;

    tracing::info!(
        "starting RGR/GRG scan at {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    let client = MexcClient::new(&config.quote_asset);
    let notifier = Notifier::new(webhook_url);
    let scanner = Scanner::new(client, config);

    let report = scanner
        .run()
        .await
        .context("scan aborted before completion")?;
    tracing::info!(
        "scan complete: {} match(es) across {} pairs, {} fetches skipped",
        report.matches.len(),
        report.pairs_scanned,
        report.skipped.len()
    );

    match notifier.notify(&report.matches).await {
        Ok(NotifyOutcome::Sent) => tracing::info!("alerts delivered to webhook"),
        Ok(NotifyOutcome::Skipped) => tracing::info!("nothing to deliver"),
        Err(error) => tracing::warn!("{}", error),
    }

    Ok(())
}
