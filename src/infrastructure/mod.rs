//! Infrastructure layer - HTTP adapters for the price source and chat transport

pub mod market_data;
pub mod telegram;

#[cfg(test)]
pub(crate) mod fake_http;

pub use market_data::YahooPriceFeed;
pub use telegram::{CommandPoller, TelegramNotifier};
