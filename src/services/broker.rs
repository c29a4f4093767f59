//! Broker interface and a stub that only logs orders.

use crate::models::{AccountInfo, OrderReceipt, OrderSide, PositionSet};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("order rejected: {0}")]
    Rejected(String),
}

pub trait Broker: Send + Sync {
    fn place_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: u64,
        price: Option<f64>,
    ) -> Result<OrderReceipt, BrokerError>;

    fn get_account_info(&self) -> AccountInfo;

    fn get_positions(&self) -> PositionSet;
}

/// Orders are logged but never executed
#[derive(Debug, Clone, Default)]
pub struct StubBroker;

impl Broker for StubBroker {
    fn place_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: u64,
        price: Option<f64>,
    ) -> Result<OrderReceipt, BrokerError> {
        if quantity == 0 {
            return Err(BrokerError::Rejected(format!(
                "zero quantity for {} {}",
                side, symbol
            )));
        }

        info!(
            symbol = %symbol,
            side = %side,
            quantity = quantity,
            price = ?price,
            "[STUB] Order placed"
        );

        Ok(OrderReceipt {
            status: "success".to_string(),
            message: "Order logged, not executed.".to_string(),
            symbol: symbol.to_string(),
            side,
            quantity,
            price,
        })
    }

    fn get_account_info(&self) -> AccountInfo {
        info!("[STUB] Retrieving account info");
        AccountInfo {
            cash: 100_000.0,
            equity: 100_000.0,
            currency: "USD".to_string(),
        }
    }

    fn get_positions(&self) -> PositionSet {
        info!("[STUB] Retrieving positions");
        PositionSet::with_cash(100_000.0).with_holding("AAPL", 10, 150.0)
    }
}
