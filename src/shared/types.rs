//! Common types used across the application

use std::collections::HashSet;
use std::fmt;

use crate::shared::errors::ConfigError;

/// Identifier of one tracked instrument, e.g. `EURUSD=X` or `AAPL`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ordered, duplicate-free set of tracked symbols.
///
/// Built once at startup from the currency group followed by the equity
/// group and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
}

impl SymbolSet {
    pub fn new(currencies: Vec<Symbol>, equities: Vec<Symbol>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        let mut symbols = Vec::with_capacity(currencies.len() + equities.len());

        for symbol in currencies.into_iter().chain(equities) {
            if symbol.as_str().trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    name: "symbol",
                    value: symbol.to_string(),
                });
            }
            if !seen.insert(symbol.clone()) {
                return Err(ConfigError::DuplicateSymbol(symbol.to_string()));
            }
            symbols.push(symbol);
        }

        Ok(Self { symbols })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
