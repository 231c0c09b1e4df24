//! Last observed price per symbol

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::shared::types::Symbol;

/// In-memory map of symbol to last successfully fetched price.
///
/// Only the monitor writes; command handlers read. Each call takes the lock
/// for exactly one operation, so readers never see a half-written entry.
/// Entries are never removed and a failed fetch never writes.
#[derive(Debug, Default)]
pub struct PriceStore {
    prices: RwLock<HashMap<Symbol, f64>>,
}

impl PriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, symbol: &Symbol) -> Option<f64> {
        self.prices.read().await.get(symbol).copied()
    }

    pub async fn set(&self, symbol: &Symbol, price: f64) {
        self.prices.write().await.insert(symbol.clone(), price);
    }

    /// Values for `symbols` in the given order, read under one lock
    pub async fn snapshot<'a, I>(&self, symbols: I) -> Vec<(Symbol, Option<f64>)>
    where
        I: IntoIterator<Item = &'a Symbol>,
    {
        let prices = self.prices.read().await;
        symbols
            .into_iter()
            .map(|symbol| (symbol.clone(), prices.get(symbol).copied()))
            .collect()
    }
}
