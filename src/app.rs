// src/app.rs
use anyhow::{anyhow, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, warn};

use crate::application::{CommandHandler, PriceMonitor, PriceMonitorConfig};
use crate::domain::price::PriceStore;
use crate::infrastructure::{CommandPoller, TelegramNotifier, YahooPriceFeed};
use crate::shared::config::BotConfig;

/// Wire the monitor and the command poller around one shared price store
/// and run both until shutdown.
pub async fn run(cfg: BotConfig) -> Result<()> {
    info!("Starting market watch");
    info!("Configuration: {:?}", cfg);

    let symbols = Arc::new(cfg.symbols.clone());
    let store = Arc::new(PriceStore::new());

    let bot = Bot::new(cfg.telegram_token.clone());
    let bot_username = match bot.get_me().await {
        Ok(me) => {
            info!(
                "Bot initialized: @{} (ID: {})",
                me.username.as_deref().unwrap_or("unknown"),
                me.id
            );
            me.username.clone()
        }
        Err(e) => {
            warn!("Failed to validate bot token: {}", e);
            None
        }
    };

    if cfg.chat_id.is_none() {
        warn!("TELEGRAM_CHAT_ID not set, reports will not be sent");
    }

    let monitor = PriceMonitor::new(
        PriceMonitorConfig::from(&cfg),
        symbols.clone(),
        Arc::new(YahooPriceFeed::new()?),
        Arc::new(TelegramNotifier::new(bot.clone())),
        store.clone(),
    );

    let handler = Arc::new(CommandHandler::from_config(&cfg, symbols, store));
    let poller = CommandPoller::new(bot, handler, bot_username);

    let monitor_task = tokio::spawn(monitor.run());
    let poller_task = tokio::spawn(poller.run());

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("🛑 Shutdown requested");
            Ok(())
        }
        result = monitor_task => {
            error!("❌ Price monitor stopped: {:?}", result);
            Err(anyhow!("price monitor stopped unexpectedly"))
        }
        result = poller_task => {
            error!("❌ Command poller stopped: {:?}", result);
            Err(anyhow!("command poller stopped unexpectedly"))
        }
    }
}
