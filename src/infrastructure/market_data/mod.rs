//! Market data adapters

mod yahoo_feed;

pub use yahoo_feed::{parse_last_close, YahooPriceFeed};
