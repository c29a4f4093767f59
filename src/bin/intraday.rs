//! Intraday trader
//!
//! Runs one pass of the intraday loop: one backend decision per universe
//! symbol, with BUY/SELL decisions sent to the (stub) broker.

use autotrader::config::Config;
use autotrader::jobs::{intraday_trading, JobContext};
use autotrader::logging;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();

    let config = Config::from_env()?;
    logging::init_logging(&config.environment, Some(config.paths.log_dir.as_path()));

    info!("Starting intraday trader");
    info!(environment = %config.environment, "Environment");
    info!(
        concurrency = config.decision_concurrency,
        "Decision concurrency: {}", config.decision_concurrency
    );

    let ctx = JobContext::from_config(config)?;
    let summary = intraday_trading(&ctx).await?;

    info!(
        dispatched = summary.dispatched,
        skipped = summary.skipped,
        undecided = summary.undecided,
        failed = summary.failed,
        "Intraday trader finished"
    );
    Ok(())
}
