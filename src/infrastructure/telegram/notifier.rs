//! Telegram-backed notifier

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use teloxide::RequestError;
use tracing::debug;

use crate::domain::notify::Notifier;
use crate::shared::errors::NotifyError;

/// Numeric chat ids go out as ids, `@name` as a channel username
pub fn recipient(chat_id: &str) -> Result<Recipient, NotifyError> {
    let chat_id = chat_id.trim();
    if chat_id.starts_with('@') && chat_id.len() > 1 {
        return Ok(Recipient::ChannelUsername(chat_id.to_string()));
    }
    chat_id
        .parse::<i64>()
        .map(|id| Recipient::Id(ChatId(id)))
        .map_err(|e| NotifyError::InvalidChatId(format!("'{}': {}", chat_id, e)))
}

fn notify_error(e: RequestError) -> NotifyError {
    match &e {
        RequestError::Api(api) => NotifyError::Rejected(api.to_string()),
        RequestError::InvalidJson { .. } => NotifyError::InvalidResponse(e.to_string()),
        _ => NotifyError::Transport(e.to_string()),
    }
}

/// Delivers reports through the Telegram Bot API
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let message = self
            .bot
            .send_message(recipient(chat_id)?, text)
            .await
            .map_err(notify_error)?;

        debug!(
            "Sent Telegram message {} (length={})",
            message.id.0,
            text.len()
        );
        Ok(())
    }
}
