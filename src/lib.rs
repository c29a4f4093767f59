//! Nasdaq AutoTrader
//!
//! Gathers prices and news for a fixed symbol universe, asks a language-model
//! backend for a trading decision per symbol and turns the answer into a
//! Markdown report or broker orders.

pub mod config;
pub mod core;
pub mod indicators;
pub mod jobs;
pub mod llm;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod utils;
pub mod validation;
