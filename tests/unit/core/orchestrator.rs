//! Unit tests for per-symbol decision orchestration

use crate::test_utils::{article, decision_json, orchestrator_with, ScriptedBackend};
use autotrader::core::{head_action, SymbolInput};
use autotrader::models::{
    MarketOverview, OrderSide, PositionSet, PriceSeries, Reading, TradeDecision, ValidatedDecision,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn overview() -> MarketOverview {
    MarketOverview::new("2024-03-01 08:00:00 KST", "bullish")
}

fn positions() -> PositionSet {
    PositionSet::with_cash(100_000.0)
}

fn input(symbol: &str) -> SymbolInput {
    SymbolInput {
        symbol: symbol.to_string(),
        prices: PriceSeries::new(symbol, (0..20).map(|i| 100.0 + i as f64).collect()),
        news: vec![article(symbol, "Earnings beat"), article(symbol, "New product")],
    }
}

fn head_with(action: serde_json::Value) -> String {
    json!({
        "as_of": "2024-03-01",
        "market_view": "mixed",
        "actions": [action],
        "watchlist": [],
        "constraints_check": {},
        "data_sources": []
    })
    .to_string()
}

fn multi_action_json() -> String {
    json!({
        "as_of": "2024-03-01",
        "market_view": "mixed",
        "actions": [
            {"symbol": "AAPL", "decision": "SELL", "target_shares": 3},
            {"symbol": "AAPL", "decision": "BUY", "target_shares": 40}
        ],
        "watchlist": [],
        "constraints_check": {},
        "data_sources": []
    })
    .to_string()
}

#[test]
fn test_build_candidate() {
    let orchestrator = orchestrator_with(Arc::new(ScriptedBackend::new()), 0.25);
    let input = input("AAPL");
    let candidate = orchestrator.build_candidate("AAPL", &input.prices, &input.news);

    assert_eq!(candidate.symbol, "AAPL");
    assert_eq!(candidate.latest_price, Reading::Value(119.0));
    assert!(candidate.technical_indicators.contains_key("RSI"));
    assert!(candidate.technical_indicators.contains_key("EMA_20"));
    assert_eq!(candidate.news_sentiment.len(), 2);
    assert!(candidate.news_sentiment.iter().all(|a| a.sentiment == 0.25));
}

#[test]
fn test_build_candidate_without_prices() {
    let orchestrator = orchestrator_with(Arc::new(ScriptedBackend::new()), 0.0);
    let candidate = orchestrator.build_candidate("NVDA", &PriceSeries::empty("NVDA"), &[]);

    assert_eq!(candidate.latest_price, Reading::NotAvailable);
    assert!(candidate.news_sentiment.is_empty());
}

#[tokio::test]
async fn test_buy_produces_single_order_intent() {
    let backend = Arc::new(ScriptedBackend::new().reply("AAPL", decision_json("AAPL", "BUY", 5)));
    let orchestrator = orchestrator_with(backend.clone(), 0.1);
    let input = input("AAPL");

    let action = orchestrator
        .run("AAPL", &input.prices, &input.news, &overview(), &positions())
        .await
        .unwrap();
    let intent = action.order_intent("AAPL").unwrap();

    assert_eq!(intent.side, OrderSide::Buy);
    assert_eq!(intent.quantity, 5);
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_each_symbol_gets_its_own_request() {
    let backend = Arc::new(ScriptedBackend::always(decision_json("X", "HOLD", 0)));
    let orchestrator = orchestrator_with(backend.clone(), 0.0);

    orchestrator
        .evaluate_universe(
            vec![input("AAPL"), input("MSFT")],
            &overview(),
            &positions(),
            1,
        )
        .await;

    assert_eq!(backend.calls(), 2);
    assert_eq!(backend.requested_symbols(), vec!["AAPL", "MSFT"]);
}

#[tokio::test]
async fn test_failure_is_isolated_to_its_symbol() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .reply("AAPL", decision_json("AAPL", "BUY", 5))
            .fail("MSFT", "connection reset")
            .reply("TSLA", decision_json("TSLA", "SELL", 2)),
    );
    let orchestrator = orchestrator_with(backend, 0.0);

    let runs = orchestrator
        .evaluate_universe(
            vec![input("AAPL"), input("MSFT"), input("TSLA")],
            &overview(),
            &positions(),
            1,
        )
        .await;

    assert_eq!(runs.len(), 3);
    assert!(runs[0].has_decision());
    assert!(!runs[1].has_decision());
    assert!(runs[1].decision.is_none());
    assert_eq!(
        runs[2].action.as_ref().map(|a| a.decision.clone()),
        Some(TradeDecision::Sell)
    );
}

#[tokio::test]
async fn test_multiple_actions_apply_only_the_first() {
    let backend = Arc::new(ScriptedBackend::always(multi_action_json()));
    let orchestrator = orchestrator_with(backend, 0.0);

    let run = orchestrator
        .evaluate(input("AAPL"), &overview(), &positions())
        .await;
    let intent = run.action.unwrap().order_intent("AAPL").unwrap();

    assert_eq!(intent.side, OrderSide::Sell);
    assert_eq!(intent.quantity, 3);
    assert_eq!(run.decision.unwrap().actions.len(), 2);
}

#[tokio::test]
async fn test_hold_is_decided_but_not_an_order() {
    let backend = Arc::new(ScriptedBackend::always(decision_json("AAPL", "HOLD", 0)));
    let orchestrator = orchestrator_with(backend, 0.0);

    let run = orchestrator
        .evaluate(input("AAPL"), &overview(), &positions())
        .await;

    assert!(run.has_decision());
    assert!(run.action.unwrap().order_intent("AAPL").is_none());
}

#[tokio::test]
async fn test_concurrent_runs_keep_input_order() {
    let backend = Arc::new(
        ScriptedBackend::always(decision_json("X", "HOLD", 0))
            .delay("AAPL", Duration::from_millis(60))
            .delay("GOOGL", Duration::from_millis(30)),
    );
    let orchestrator = orchestrator_with(backend, 0.0);

    let runs = orchestrator
        .evaluate_universe(
            vec![input("AAPL"), input("GOOGL"), input("MSFT")],
            &overview(),
            &positions(),
            3,
        )
        .await;

    let symbols: Vec<&str> = runs.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["AAPL", "GOOGL", "MSFT"]);
}

#[tokio::test]
async fn test_loose_head_fields_still_dispatch() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .reply(
                "AAPL",
                head_with(json!({"decision": "BUY", "confidence": "high", "target_shares": 5})),
            )
            .reply(
                "MSFT",
                head_with(json!({"decision": "SELL", "confidence": 0.7, "target_shares": 5.0})),
            )
            .reply("TSLA", head_with(json!({"decision": null, "target_shares": 5}))),
    );
    let orchestrator = orchestrator_with(backend, 0.0);

    let runs = orchestrator
        .evaluate_universe(
            vec![input("AAPL"), input("MSFT"), input("TSLA")],
            &overview(),
            &positions(),
            1,
        )
        .await;

    let aapl = runs[0].action.as_ref().unwrap().order_intent("AAPL").unwrap();
    assert_eq!((aapl.side, aapl.quantity), (OrderSide::Buy, 5));
    let msft = runs[1].action.as_ref().unwrap().order_intent("MSFT").unwrap();
    assert_eq!((msft.side, msft.quantity), (OrderSide::Sell, 5));

    // A null decision is a decided skip, not a missing decision
    assert!(runs[2].has_decision());
    assert!(runs[2].action.as_ref().unwrap().order_intent("TSLA").is_none());
}

#[test]
fn test_head_action_malformed_entry_is_no_decision() {
    let decision: ValidatedDecision = serde_json::from_value(json!({
        "as_of": "2024-03-01",
        "market_view": "mixed",
        "actions": ["BUY AAPL"],
        "watchlist": [],
        "constraints_check": {},
        "data_sources": []
    }))
    .unwrap();

    assert!(head_action("AAPL", &decision).is_none());
}

#[test]
fn test_head_action_empty_actions() {
    let decision: ValidatedDecision = serde_json::from_value(json!({
        "as_of": "2024-03-01",
        "market_view": "quiet",
        "actions": [],
        "watchlist": ["AAPL"],
        "constraints_check": {},
        "data_sources": []
    }))
    .unwrap();

    assert!(head_action("AAPL", &decision).is_none());
}
