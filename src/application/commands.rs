//! Chat commands and handlers

use crate::domain::price::PriceStore;
use crate::shared::config::BotConfig;
use crate::shared::types::SymbolSet;
use std::sync::Arc;
use std::time::Duration;
use teloxide::utils::command::BotCommands;

/// Commands accepted from the chat
#[derive(BotCommands, Debug, Clone, Copy, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum BotCommand {
    #[command(description = "show the greeting")]
    Start,
    #[command(description = "show the last known prices")]
    Status,
    #[command(description = "list the tracked symbols")]
    Symbols,
}

impl BotCommand {
    /// Parse message text such as `/status` or `/status@my_bot`.
    ///
    /// Returns `None` for plain text, unknown commands, and commands
    /// addressed to a different bot.
    pub fn from_text(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let text = text.trim();
        if !text.starts_with('/') {
            return None;
        }
        Self::parse(text, bot_username.unwrap_or_default()).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BotCommand::Start => "start",
            BotCommand::Status => "status",
            BotCommand::Symbols => "symbols",
        }
    }
}

/// Answers chat commands from the shared price store.
///
/// Handlers only read; a reply reflects whatever the store holds when the
/// command arrives, even in the middle of a monitor cycle.
pub struct CommandHandler {
    bot_name: String,
    interval: Duration,
    symbols: Arc<SymbolSet>,
    store: Arc<PriceStore>,
}

impl CommandHandler {
    pub fn new(
        bot_name: impl Into<String>,
        interval: Duration,
        symbols: Arc<SymbolSet>,
        store: Arc<PriceStore>,
    ) -> Self {
        Self {
            bot_name: bot_name.into(),
            interval,
            symbols,
            store,
        }
    }

    pub fn from_config(cfg: &BotConfig, symbols: Arc<SymbolSet>, store: Arc<PriceStore>) -> Self {
        Self::new(cfg.bot_name.clone(), cfg.interval, symbols, store)
    }

    pub async fn handle(&self, command: BotCommand) -> String {
        match command {
            BotCommand::Start => self.start(),
            BotCommand::Status => self.status().await,
            BotCommand::Symbols => self.symbols(),
        }
    }

    pub fn start(&self) -> String {
        format!("{} minimal bot running. Commands: /status /symbols", self.bot_name)
    }

    pub async fn status(&self) -> String {
        let snapshot = self.store.snapshot(self.symbols.iter()).await;

        let mut msg = format!(
            "Monitoring {} symbols. Interval={}s",
            self.symbols.len(),
            self.interval.as_secs()
        );
        for (symbol, price) in snapshot {
            let value = match price {
                Some(price) => price.to_string(),
                None => "no data".to_string(),
            };
            msg.push_str(&format!("\n{}: {}", symbol, value));
        }
        msg
    }

    pub fn symbols(&self) -> String {
        if self.symbols.is_empty() {
            return "No symbols tracked".to_string();
        }
        self.symbols
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::Symbol;

    fn handler(store: Arc<PriceStore>) -> CommandHandler {
        let symbols = SymbolSet::new(
            vec![Symbol::from("EURUSD=X"), Symbol::from("EURJPY=X")],
            vec![Symbol::from("AAPL")],
        )
        .unwrap();
        CommandHandler::new("SniperPro", Duration::from_secs(60), Arc::new(symbols), store)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(BotCommand::from_text("/start", None), Some(BotCommand::Start));
        assert_eq!(BotCommand::from_text("/status", None), Some(BotCommand::Status));
        assert_eq!(BotCommand::from_text("  /symbols  ", None), Some(BotCommand::Symbols));
    }

    #[test]
    fn test_parse_ignores_other_text() {
        assert_eq!(BotCommand::from_text("status", None), None);
        assert_eq!(BotCommand::from_text("/buy AAPL", None), None);
        assert_eq!(BotCommand::from_text("", None), None);
        assert_eq!(BotCommand::from_text("/", None), None);
    }

    #[test]
    fn test_parse_mentions() {
        assert_eq!(
            BotCommand::from_text("/status@sniper_bot", Some("sniper_bot")),
            Some(BotCommand::Status)
        );
        assert_eq!(BotCommand::from_text("/status@other_bot", Some("sniper_bot")), None);
        assert_eq!(BotCommand::from_text("/status@anyone", None), None);
    }

    #[test]
    fn test_start_greeting() {
        let handler = handler(Arc::new(PriceStore::new()));
        assert_eq!(
            handler.start(),
            "SniperPro minimal bot running. Commands: /status /symbols"
        );
    }

    #[tokio::test]
    async fn test_status_before_any_cycle() {
        let handler = handler(Arc::new(PriceStore::new()));

        assert_eq!(
            handler.handle(BotCommand::Status).await,
            "Monitoring 3 symbols. Interval=60s\nEURUSD=X: no data\nEURJPY=X: no data\nAAPL: no data"
        );
    }

    #[tokio::test]
    async fn test_status_reflects_store() {
        let store = Arc::new(PriceStore::new());
        store.set(&Symbol::from("EURJPY=X"), 162.5).await;
        store.set(&Symbol::from("AAPL"), 190.0).await;
        let handler = handler(store);

        assert_eq!(
            handler.status().await,
            "Monitoring 3 symbols. Interval=60s\nEURUSD=X: no data\nEURJPY=X: 162.5\nAAPL: 190"
        );
    }

    #[tokio::test]
    async fn test_symbols_is_idempotent() {
        let handler = handler(Arc::new(PriceStore::new()));

        let first = handler.handle(BotCommand::Symbols).await;
        let second = handler.handle(BotCommand::Symbols).await;
        assert_eq!(first, "EURUSD=X\nEURJPY=X\nAAPL");
        assert_eq!(first, second);
    }

    #[test]
    fn test_symbols_when_empty() {
        let handler = CommandHandler::new(
            "SniperPro",
            Duration::from_secs(60),
            Arc::new(SymbolSet::default()),
            Arc::new(PriceStore::new()),
        );
        assert_eq!(handler.symbols(), "No symbols tracked");
    }
}
