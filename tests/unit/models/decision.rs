//! Unit tests for decision actions and order intents

use autotrader::models::{OrderSide, TradeAction, TradeDecision, ValidatedDecision};
use serde_json::json;

fn action(value: serde_json::Value) -> TradeAction {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_decision_matching_is_exact() {
    assert_eq!(TradeDecision::from("BUY".to_string()), TradeDecision::Buy);
    assert_eq!(TradeDecision::from("SELL".to_string()), TradeDecision::Sell);
    assert_eq!(TradeDecision::from("HOLD".to_string()), TradeDecision::Hold);
    assert_eq!(
        TradeDecision::from("buy".to_string()),
        TradeDecision::Other("buy".to_string())
    );
}

#[test]
fn test_buy_becomes_order_intent() {
    let intent = action(json!({"decision": "BUY", "target_shares": 5}))
        .order_intent("AAPL")
        .unwrap();
    assert_eq!(intent.symbol, "AAPL");
    assert_eq!(intent.side, OrderSide::Buy);
    assert_eq!(intent.quantity, 5);
}

#[test]
fn test_missing_target_shares_defaults_to_one() {
    let intent = action(json!({"decision": "SELL"})).order_intent("TSLA").unwrap();
    assert_eq!(intent.side, OrderSide::Sell);
    assert_eq!(intent.quantity, 1);
}

#[test]
fn test_hold_and_unknown_are_no_ops() {
    assert!(action(json!({"decision": "HOLD"})).order_intent("MSFT").is_none());
    assert!(action(json!({"decision": "Buy"})).order_intent("MSFT").is_none());
    assert!(action(json!({})).order_intent("MSFT").is_none());
}

#[test]
fn test_missing_decision_displays_not_available() {
    assert_eq!(action(json!({})).decision.to_string(), "N/A");
}

#[test]
fn test_whole_float_target_shares_is_accepted() {
    let intent = action(json!({"decision": "SELL", "target_shares": 5.0}))
        .order_intent("MSFT")
        .unwrap();
    assert_eq!(intent.quantity, 5);
}

#[test]
fn test_unusable_target_shares_defaults_to_one() {
    for shares in [json!(2.5), json!(-3), json!("five"), json!(null), json!([5])] {
        let parsed = action(json!({"decision": "BUY", "target_shares": shares}));
        assert_eq!(parsed.target_shares, None);
        assert_eq!(parsed.order_intent("AAPL").unwrap().quantity, 1);
    }
}

#[test]
fn test_loose_field_types_keep_the_decision() {
    let parsed = action(json!({
        "symbol": 42,
        "decision": "BUY",
        "confidence": "high",
        "reasoning": ["momentum", "earnings"],
        "target_shares": 5
    }));

    assert_eq!(parsed.decision, TradeDecision::Buy);
    assert_eq!(parsed.confidence_text().as_deref(), Some("high"));
    assert_eq!(
        parsed.reasoning_text().as_deref(),
        Some(r#"["momentum","earnings"]"#)
    );
    assert_eq!(parsed.order_intent("AAPL").unwrap().quantity, 5);
}

#[test]
fn test_non_string_decision_is_a_skip() {
    let null_decision = action(json!({"decision": null, "target_shares": 5}));
    assert_eq!(null_decision.decision.to_string(), "N/A");
    assert!(null_decision.order_intent("AAPL").is_none());

    let numeric = action(json!({"decision": 1}));
    assert_eq!(numeric.decision, TradeDecision::Other("1".to_string()));
    assert!(numeric.order_intent("AAPL").is_none());
}

#[test]
fn test_non_object_action_is_malformed() {
    let result: Result<TradeAction, _> = serde_json::from_value(json!("BUY AAPL"));
    assert!(result.is_err());
}

#[test]
fn test_head_action_reads_first_entry_only() {
    let decision: ValidatedDecision = serde_json::from_value(json!({
        "as_of": "2024-03-01",
        "market_view": "mixed",
        "actions": [
            {"symbol": "AAPL", "decision": "BUY", "target_shares": 2},
            {"symbol": "AAPL", "decision": "SELL", "target_shares": 9}
        ],
        "watchlist": [],
        "constraints_check": {},
        "data_sources": []
    }))
    .unwrap();

    let head = decision.head_action().unwrap().unwrap();
    assert_eq!(head.decision, TradeDecision::Buy);
    assert_eq!(head.target_shares, Some(2));
}

#[test]
fn test_unknown_keys_survive_round_trip() {
    let original = json!({
        "as_of": "2024-03-01",
        "market_view": "mixed",
        "actions": [],
        "watchlist": ["NVDA"],
        "constraints_check": {"cash_ok": true},
        "data_sources": [],
        "risk_notes": {"vix": 17.5}
    });
    let decision: ValidatedDecision = serde_json::from_value(original.clone()).unwrap();
    assert!(decision.head_action().is_none());
    assert_eq!(decision.extra.get("risk_notes"), Some(&json!({"vix": 17.5})));
    assert_eq!(decision.to_value().unwrap(), original);
}
