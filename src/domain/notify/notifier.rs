//! Notifier interface

use async_trait::async_trait;

use crate::shared::errors::NotifyError;

/// Delivers plain text messages to a chat
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotifyError>;
}
