//! Job handlers for the report and trading workflows

use crate::core::{SymbolInput, SymbolRun};
use crate::jobs::context::JobContext;
use crate::jobs::types::{IntradaySummary, ReportArtifact};
use crate::models::{MarketOverview, PositionSet, PriceSeries};
use crate::report::{daily_report, REPORT_TITLE};
use crate::utils::time::{format_kst_timestamp, kst_now, report_filename};
use std::collections::HashMap;
use tracing::{error, info, warn};

/// Trend label handed to the backend until a real market classifier exists.
pub const DEFAULT_TREND: &str = "bullish";

/// Cash assumed by the report job, which does not consult the broker.
pub const PLACEHOLDER_CASH: f64 = 100_000.0;

type JobError = Box<dyn std::error::Error + Send + Sync>;

/// Decide every universe symbol and write the daily Markdown report.
pub async fn premarket_report(ctx: &JobContext) -> Result<ReportArtifact, JobError> {
    info!(symbols = ctx.config.universe.len(), "Running pre-market report job");

    let now = kst_now();
    let generated_at = format_kst_timestamp(&now);
    let overview = MarketOverview::new(generated_at.clone(), DEFAULT_TREND);
    let positions = PositionSet::with_cash(PLACEHOLDER_CASH);

    let runs = evaluate_universe(ctx, &overview, &positions).await;
    let decided = runs.iter().filter(|r| r.has_decision()).count();

    let content = daily_report(&generated_at, &runs);
    let markdown_path = ctx
        .renderer
        .render_markdown(REPORT_TITLE, &content, &report_filename(&now))?;

    info!(
        path = %markdown_path.display(),
        symbols = runs.len(),
        decided = decided,
        "Pre-market report job completed"
    );

    Ok(ReportArtifact {
        markdown_path,
        symbols: runs.len(),
        decided,
    })
}

/// Decide every universe symbol and send BUY/SELL orders to the broker.
pub async fn intraday_trading(ctx: &JobContext) -> Result<IntradaySummary, JobError> {
    info!(symbols = ctx.config.universe.len(), "Running intraday trading job");

    let overview = MarketOverview::new(format_kst_timestamp(&kst_now()), DEFAULT_TREND);
    let positions = ctx.broker.get_positions();

    let runs = evaluate_universe(ctx, &overview, &positions).await;

    let mut summary = IntradaySummary::default();
    for run in &runs {
        let symbol = &run.symbol;
        let Some(action) = &run.action else {
            warn!(symbol = %symbol, "[Intraday] No clear decision from the LLM for {}", symbol);
            summary.undecided += 1;
            continue;
        };

        match action.order_intent(symbol) {
            Some(intent) => {
                info!(
                    symbol = %symbol,
                    side = %intent.side,
                    quantity = intent.quantity,
                    "[Intraday] {} decision for {}, placing order",
                    intent.side,
                    symbol
                );
                match ctx
                    .broker
                    .place_order(&intent.symbol, intent.side, intent.quantity, None)
                {
                    Ok(receipt) => {
                        summary.dispatched += 1;
                        summary.orders.push(receipt);
                    }
                    Err(e) => {
                        error!(symbol = %symbol, error = %e, "[Intraday] Order for {} failed", symbol);
                        summary.failed += 1;
                    }
                }
            }
            None => {
                info!(
                    symbol = %symbol,
                    decision = %action.decision,
                    "[Intraday] HOLD/SKIP decision for {}",
                    symbol
                );
                summary.skipped += 1;
            }
        }
    }

    info!(
        dispatched = summary.dispatched,
        skipped = summary.skipped,
        undecided = summary.undecided,
        failed = summary.failed,
        "Intraday trading job completed"
    );
    Ok(summary)
}

async fn evaluate_universe(
    ctx: &JobContext,
    overview: &MarketOverview,
    positions: &PositionSet,
) -> Vec<SymbolRun> {
    ctx.orchestrator
        .evaluate_universe(
            collect_inputs(ctx),
            overview,
            positions,
            ctx.config.decision_concurrency,
        )
        .await
}

/// Prices and news per universe symbol, in universe order.
///
/// Fetch failures are logged and leave that symbol with empty prices or news;
/// the symbol still reaches the backend and the report.
fn collect_inputs(ctx: &JobContext) -> Vec<SymbolInput> {
    let mut news = ctx
        .news
        .get_news(&ctx.config.universe)
        .unwrap_or_else(|e| {
            error!(error = %e, "Failed to fetch news");
            HashMap::new()
        });

    ctx.config
        .universe
        .iter()
        .map(|symbol| {
            let prices = ctx.market_data.get_prices(symbol).unwrap_or_else(|e| {
                error!(symbol = %symbol, error = %e, "Failed to fetch prices for {}", symbol);
                PriceSeries::empty(symbol.as_str())
            });
            SymbolInput {
                symbol: symbol.clone(),
                prices,
                news: news.remove(symbol).unwrap_or_default(),
            }
        })
        .collect()
}
