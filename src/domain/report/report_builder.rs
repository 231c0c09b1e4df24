//! Per-cycle report

use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::price::Signal;
use crate::shared::types::Symbol;
use crate::shared::utils::{format_price, format_timestamp};

/// One line of a report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Priced {
        symbol: Symbol,
        price: f64,
        signal: Signal,
    },
    Unavailable {
        symbol: Symbol,
    },
}

impl ReportLine {
    pub fn signal(&self) -> Signal {
        match self {
            ReportLine::Priced { signal, .. } => *signal,
            ReportLine::Unavailable { .. } => Signal::Unavailable,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Priced { symbol, price, signal } => {
                write!(f, "{}: {} => {}", symbol, format_price(*price), signal)
            }
            ReportLine::Unavailable { symbol } => write!(f, "{}: price N/A", symbol),
        }
    }
}

/// Ordered lines of one cycle plus the time the cycle started
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub lines: Vec<ReportLine>,
}

impl Report {
    pub fn new(title: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            timestamp,
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: ReportLine) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Message text: `<title> (<timestamp>):` followed by one line per symbol
    pub fn render(&self) -> String {
        let mut text = format!("{} ({}):", self.title, format_timestamp(self.timestamp));
        for line in &self.lines {
            text.push('\n');
            text.push_str(&line.to_string());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_line_formats() {
        let priced = ReportLine::Priced {
            symbol: Symbol::from("EURUSD=X"),
            price: 1.1,
            signal: Signal::NoPrev,
        };
        assert_eq!(priced.to_string(), "EURUSD=X: 1.100000 => NO PREV");
        assert_eq!(priced.signal(), Signal::NoPrev);

        let missing = ReportLine::Unavailable {
            symbol: Symbol::from("TSLA"),
        };
        assert_eq!(missing.to_string(), "TSLA: price N/A");
        assert_eq!(missing.signal(), Signal::Unavailable);
    }

    #[test]
    fn test_render() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 14, 30, 0).unwrap();
        let mut report = Report::new("SniperPro signals", ts);
        assert!(report.is_empty());

        report.push(ReportLine::Priced {
            symbol: Symbol::from("AAPL"),
            price: 190.123,
            signal: Signal::Buy,
        });
        report.push(ReportLine::Unavailable {
            symbol: Symbol::from("TSLA"),
        });

        assert_eq!(
            report.render(),
            "SniperPro signals (2025-01-02 14:30:00 UTC):\nAAPL: 190.123000 => BUY\nTSLA: price N/A"
        );
    }
}
