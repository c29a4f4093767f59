//! Daily recommendation report body

use crate::core::SymbolRun;
use std::fmt::Write;

pub const REPORT_TITLE: &str = "Daily Stock Recommendations";
pub const NO_DECISION_MARKER: &str = "- *No clear decision from the LLM.*";

/// Report body (without the title heading) for a run, in run order.
pub fn daily_report(generated_at: &str, runs: &[SymbolRun]) -> String {
    let mut out = String::new();
    let _ = write!(out, "*Generated at: {}*\n\n", generated_at);
    for run in runs {
        out.push_str(&symbol_section(run));
    }
    out
}

pub fn symbol_section(run: &SymbolRun) -> String {
    let mut out = String::new();
    let _ = write!(out, "## {}\n\n", run.symbol);

    match &run.action {
        Some(action) => {
            let _ = writeln!(out, "- **Decision:** {}", action.decision);
            let _ = writeln!(out, "- **Confidence:** {}", or_na(action.confidence_text()));
            let _ = writeln!(
                out,
                "- **Reasoning:** {}",
                or_na(action.reasoning_text())
            );
            let _ = write!(out, "- **Target shares:** {}\n\n", or_na(action.target_shares));
        }
        None => {
            let _ = write!(out, "{}\n\n", NO_DECISION_MARKER);
        }
    }

    let _ = write!(out, "### Latest prices\n\n`{:?}`\n\n", run.prices.closes);
    out.push_str("### News\n\n");
    for item in &run.candidate.news_sentiment {
        let _ = writeln!(
            out,
            "- **{}**: {} (sentiment: {:.2})",
            item.article.headline, item.article.summary, item.sentiment
        );
    }
    out.push_str("\n---\n\n");
    out
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}
