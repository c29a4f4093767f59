//! Decision request/response contract with the language-model backend

use crate::models::candidate::Candidate;
use crate::models::market::{MarketOverview, PositionSet};
use crate::models::order::{OrderIntent, OrderSide};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Shares traded when a BUY/SELL action omits `target_shares`.
pub const DEFAULT_TARGET_SHARES: u64 = 1;

/// Payload sent to the backend. Candidate order is preserved on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub market_overview: MarketOverview,
    pub positions: PositionSet,
    pub candidates: Vec<Candidate>,
}

impl DecisionRequest {
    pub fn new(
        market_overview: MarketOverview,
        positions: PositionSet,
        candidates: Vec<Candidate>,
    ) -> Self {
        Self {
            market_overview,
            positions,
            candidates,
        }
    }
}

/// A backend response that passed the top-level schema check.
///
/// Entries of `actions` are kept as raw JSON; they are only interpreted when
/// the orchestrator reads the head action. Keys outside the schema are kept
/// in `extra`, so serializing this value reproduces what the backend sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedDecision {
    pub as_of: String,
    pub market_view: String,
    pub actions: Vec<Value>,
    pub watchlist: Vec<Value>,
    pub constraints_check: Map<String, Value>,
    pub data_sources: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ValidatedDecision {
    /// The first action entry, interpreted leniently.
    ///
    /// Only this entry is ever applied; a response may carry more.
    pub fn head_action(&self) -> Option<Result<TradeAction, serde_json::Error>> {
        self.actions
            .first()
            .map(|raw| serde_json::from_value(raw.clone()))
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// The backend's verdict for a symbol. Matching is exact and case-sensitive;
/// anything other than `BUY`/`SELL`/`HOLD` is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradeDecision {
    Buy,
    Sell,
    Hold,
    Other(String),
}

impl Default for TradeDecision {
    fn default() -> Self {
        TradeDecision::Other("N/A".to_string())
    }
}

impl From<String> for TradeDecision {
    fn from(value: String) -> Self {
        match value.as_str() {
            "BUY" => TradeDecision::Buy,
            "SELL" => TradeDecision::Sell,
            "HOLD" => TradeDecision::Hold,
            _ => TradeDecision::Other(value),
        }
    }
}

impl From<TradeDecision> for String {
    fn from(value: TradeDecision) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TradeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDecision::Buy => f.write_str("BUY"),
            TradeDecision::Sell => f.write_str("SELL"),
            TradeDecision::Hold => f.write_str("HOLD"),
            TradeDecision::Other(raw) => f.write_str(raw),
        }
    }
}

/// One entry of `actions`.
///
/// Only `decision` drives behaviour; the other fields keep whatever JSON the
/// backend sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Value>,
    #[serde(default, deserialize_with = "lenient_decision")]
    pub decision: TradeDecision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<Value>,
    /// Whole, non-negative share counts only (`5` or `5.0`); anything else
    /// reads as absent.
    #[serde(
        default,
        deserialize_with = "lenient_shares",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_shares: Option<u64>,
}

/// Strings map through [`TradeDecision::from`]; `null` is `N/A` and any other
/// JSON value is kept as its text, so both fall through to a skip.
fn lenient_decision<'de, D>(deserializer: D) -> Result<TradeDecision, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => TradeDecision::from(raw),
        Value::Null => TradeDecision::default(),
        other => TradeDecision::Other(other.to_string()),
    })
}

fn lenient_shares<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        _ => None,
    })
}

/// Text of a pass-through field: strings without quotes, anything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl TradeAction {
    pub fn confidence_text(&self) -> Option<String> {
        self.confidence.as_ref().map(display_value)
    }

    pub fn reasoning_text(&self) -> Option<String> {
        self.reasoning.as_ref().map(display_value)
    }

    /// BUY and SELL become orders for `symbol`; everything else is a no-op.
    pub fn order_intent(&self, symbol: &str) -> Option<OrderIntent> {
        let side = match self.decision {
            TradeDecision::Buy => OrderSide::Buy,
            TradeDecision::Sell => OrderSide::Sell,
            TradeDecision::Hold | TradeDecision::Other(_) => return None,
        };
        Some(OrderIntent {
            symbol: symbol.to_string(),
            side,
            quantity: self.target_shares.unwrap_or(DEFAULT_TARGET_SHARES),
        })
    }
}
