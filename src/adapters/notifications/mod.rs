//! Order confirmation notifiers.

mod logging_notifier;

pub use logging_notifier::{LoggingConfirmationNotifier, SentConfirmation};
