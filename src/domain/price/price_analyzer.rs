//! Price movement classification

use std::fmt;

/// Classification of one symbol's movement within a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    NoPrev,
    Buy,
    Sell,
    Hold,
    Unavailable,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::NoPrev => "NO PREV",
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
            Signal::Unavailable => "N/A",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies price moves against the last observation
pub struct PriceAnalyzer;

impl PriceAnalyzer {
    /// Compare `current` with the previous observation.
    ///
    /// Comparison is exact on the `f64` values with no tolerance, so noise in
    /// the last digits of a quote can flip the result between HOLD, BUY and
    /// SELL. `Unavailable` is never returned here; it is assigned by the
    /// monitor when a fetch fails.
    pub fn evaluate(previous: Option<f64>, current: f64) -> Signal {
        match previous {
            None => Signal::NoPrev,
            Some(prev) if current > prev => Signal::Buy,
            Some(prev) if current < prev => Signal::Sell,
            Some(_) => Signal::Hold,
        }
    }
}
