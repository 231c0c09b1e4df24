//! Notification domain - outbound delivery of text messages

mod notifier;

pub use notifier::Notifier;
