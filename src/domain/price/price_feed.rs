//! Price feed interface

use async_trait::async_trait;

use crate::shared::errors::PriceError;
use crate::shared::types::Symbol;

/// Source of last traded prices
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Human readable name used in logs
    fn name(&self) -> &str;

    /// Most recent traded price for `symbol`
    async fn last_price(&self, symbol: &Symbol) -> Result<f64, PriceError>;
}
