//! Inbound command polling

use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::UpdateKind;
use teloxide::RequestError;
use tracing::{debug, info, warn};

use crate::application::commands::{BotCommand, CommandHandler};

const POLL_TIMEOUT_SECS: u32 = 30;
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Long-polls `getUpdates` and answers chat commands
pub struct CommandPoller {
    bot: Bot,
    handler: Arc<CommandHandler>,
    bot_username: Option<String>,
}

impl CommandPoller {
    pub fn new(bot: Bot, handler: Arc<CommandHandler>, bot_username: Option<String>) -> Self {
        Self {
            bot,
            handler,
            bot_username,
        }
    }

    /// Poll until the process exits. Errors are logged and retried.
    pub async fn run(self) {
        info!("Bot starting polling");
        let mut offset: Option<i32> = None;

        loop {
            if let Err(e) = self.poll_once(&mut offset).await {
                warn!("getUpdates failed: {}", e);
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }

    /// Fetch one batch after `offset`, answer its commands and advance `offset`
    pub async fn poll_once(&self, offset: &mut Option<i32>) -> Result<(), RequestError> {
        let mut request = self.bot.get_updates().timeout(POLL_TIMEOUT_SECS);
        if let Some(offset) = *offset {
            request = request.offset(offset);
        }

        for update in request.await? {
            *offset = Some(update.id.0 as i32 + 1);

            if let Some((chat_id, reply)) = self.reply_for(&update).await {
                if let Err(e) = self.bot.send_message(chat_id, reply).await {
                    warn!("Failed to reply in chat {}: {}", chat_id, e);
                }
            }
        }
        Ok(())
    }

    /// Chat and reply text for an update carrying a known command
    pub async fn reply_for(&self, update: &Update) -> Option<(ChatId, String)> {
        let message = match &update.kind {
            UpdateKind::Message(message) => message,
            _ => return None,
        };
        let command = BotCommand::from_text(message.text()?, self.bot_username.as_deref())?;

        debug!("Command /{} from chat {}", command.as_str(), message.chat.id);
        Some((message.chat.id, self.handler.handle(command).await))
    }
}
