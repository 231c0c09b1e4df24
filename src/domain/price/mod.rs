//! Price domain - price sources, last observed prices and signal evaluation

mod price_analyzer;
mod price_feed;
mod price_store;

pub use price_analyzer::{PriceAnalyzer, Signal};
pub use price_feed::PriceFeed;
pub use price_store::PriceStore;
