//! Error handling for the application

use thiserror::Error;

/// Price-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriceError {
    #[error("Price feed unavailable: {0}")]
    FeedUnavailable(String),

    #[error("Invalid price data: {0}")]
    InvalidPriceData(String),

    #[error("No price data for {0}")]
    NoData(String),

    #[error("Price fetch timed out after {0}s")]
    Timeout(u64),
}

/// Notification-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotifyError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API rejected request: {0}")]
    Rejected(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid chat id {0}")]
    InvalidChatId(String),
}

/// Configuration errors, always fatal at startup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingCredential(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Duplicate symbol: {0}")]
    DuplicateSymbol(String),

    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Failed to parse config file: {0}")]
    Parse(String),
}
