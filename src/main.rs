//! Nasdaq AutoTrader
//!
//! Runs the pre-market report job once: one backend decision per universe
//! symbol, written to a Markdown report in the reports directory.

use autotrader::config::Config;
use autotrader::jobs::{premarket_report, JobContext};
use autotrader::logging;
use dotenvy::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = Config::from_env()?;
    logging::init_logging(&config.environment, Some(config.paths.log_dir.as_path()));

    info!("Starting Nasdaq AutoTrader");
    info!(environment = %config.environment, "Environment");
    info!(symbols = ?config.universe, model = %config.llm.model, "Universe: {}", config.universe.join(", "));
    if config.llm.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set - every symbol will be reported without a decision");
    }

    let ctx = JobContext::from_config(config)?;
    let artifact = premarket_report(&ctx).await?;

    info!(
        path = %artifact.markdown_path.display(),
        decided = artifact.decided,
        symbols = artifact.symbols,
        "Nasdaq AutoTrader finished"
    );
    Ok(())
}
