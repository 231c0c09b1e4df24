use crate::domain::notify::Notifier;
use crate::domain::price::{PriceAnalyzer, PriceFeed, PriceStore, Signal};
use crate::domain::report::{Report, ReportLine};
use crate::shared::config::BotConfig;
use crate::shared::errors::PriceError;
use crate::shared::types::{Symbol, SymbolSet};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

/// Price monitor configuration
#[derive(Debug, Clone)]
pub struct PriceMonitorConfig {
    pub interval: Duration,
    pub warmup: Duration,
    pub fetch_timeout: Duration,
    pub report_title: String,
    pub chat_id: Option<String>,
}

impl From<&BotConfig> for PriceMonitorConfig {
    fn from(cfg: &BotConfig) -> Self {
        Self {
            interval: cfg.interval,
            warmup: cfg.warmup,
            fetch_timeout: cfg.fetch_timeout,
            report_title: cfg.report_title(),
            chat_id: cfg.chat_id.clone(),
        }
    }
}

/// What a single cycle ended with
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    /// No chat configured, nothing fetched or sent
    NoTarget,
    /// No lines were produced
    Empty,
    Sent(Report),
    SendFailed(Report),
}

/// Periodic fetch-evaluate-report loop
pub struct PriceMonitor {
    config: PriceMonitorConfig,
    symbols: Arc<SymbolSet>,
    feed: Arc<dyn PriceFeed>,
    notifier: Arc<dyn Notifier>,
    store: Arc<PriceStore>,
}

impl PriceMonitor {
    pub fn new(
        config: PriceMonitorConfig,
        symbols: Arc<SymbolSet>,
        feed: Arc<dyn PriceFeed>,
        notifier: Arc<dyn Notifier>,
        store: Arc<PriceStore>,
    ) -> Self {
        Self {
            config,
            symbols,
            feed,
            notifier,
            store,
        }
    }

    /// Run forever: one cycle after the warm-up delay, then one per interval.
    ///
    /// Cycles run back to back on this task, so they never overlap; a cycle
    /// that overruns the interval delays the next tick instead of bursting.
    pub async fn run(self) {
        info!(
            "🚀 Starting price monitor: {} symbols, interval {}s, feed {}",
            self.symbols.len(),
            self.config.interval.as_secs(),
            self.feed.name()
        );

        tokio::time::sleep(self.config.warmup).await;

        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }

    /// Execute one full cycle over every symbol
    pub async fn run_cycle(&self) -> CycleOutcome {
        let chat_id = match self.config.chat_id.as_deref() {
            Some(chat_id) => chat_id,
            None => {
                warn!("TELEGRAM_CHAT_ID not set.");
                return CycleOutcome::NoTarget;
            }
        };

        let report = self.collect_report().await;
        if report.is_empty() {
            debug!("No symbols tracked, nothing to send");
            return CycleOutcome::Empty;
        }

        match self.notifier.send_message(chat_id, &report.render()).await {
            Ok(()) => {
                info!("Sent signals");
                CycleOutcome::Sent(report)
            }
            Err(e) => {
                error!("send failed: {}", e);
                CycleOutcome::SendFailed(report)
            }
        }
    }

    /// Fetch every symbol in order, update the store and build the report
    pub async fn collect_report(&self) -> Report {
        let mut report = Report::new(self.config.report_title.clone(), Utc::now());

        for symbol in self.symbols.iter() {
            let line = match self.fetch(symbol).await {
                Ok(price) => {
                    let previous = self.store.get(symbol).await;
                    let signal = PriceAnalyzer::evaluate(previous, price);
                    self.store.set(symbol, price).await;
                    ReportLine::Priced {
                        symbol: symbol.clone(),
                        price,
                        signal,
                    }
                }
                Err(e) => {
                    warn!("fetch error {}: {}", symbol, e);
                    ReportLine::Unavailable {
                        symbol: symbol.clone(),
                    }
                }
            };
            debug!("{}", line);
            report.push(line);
        }

        let unavailable = report
            .lines
            .iter()
            .filter(|line| line.signal() == Signal::Unavailable)
            .count();
        if unavailable > 0 {
            warn!("{} of {} symbols unavailable this cycle", unavailable, report.lines.len());
        }

        report
    }

    async fn fetch(&self, symbol: &Symbol) -> Result<f64, PriceError> {
        match tokio::time::timeout(self.config.fetch_timeout, self.feed.last_price(symbol)).await {
            Ok(result) => result,
            Err(_) => Err(PriceError::Timeout(self.config.fetch_timeout.as_secs())),
        }
    }
}
