//! Application layer - use cases and services

pub mod commands;
pub mod price_monitor;

pub use commands::{BotCommand, CommandHandler};
pub use price_monitor::{CycleOutcome, PriceMonitor, PriceMonitorConfig};
