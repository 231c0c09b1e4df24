//! Marketwatch - periodic price watch with BUY/SELL/HOLD signals
//! delivered to a Telegram chat

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types for convenience
pub use application::{CommandHandler, PriceMonitor};
pub use domain::price::{PriceAnalyzer, PriceFeed, PriceStore, Signal};
pub use shared::config::{BotConfig, ConfigLoader};
