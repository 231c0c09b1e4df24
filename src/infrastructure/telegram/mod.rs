//! Telegram transport - outbound messages and inbound command polling

mod notifier;
mod poller;

pub use notifier::TelegramNotifier;
pub use poller::CommandPoller;
