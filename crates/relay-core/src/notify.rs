//! Notification seam.
//!
//! Workflow transitions produce messages for the next actor. Delivery is
//! behind the [`Notifier`] trait; failures are logged by the engine and
//! never fail the workflow operation that triggered them.

use async_trait::async_trait;

/// Delivers a message to one recipient account.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message` to `recipient`. Errors are reported as strings so
    /// implementations are free to wrap any transport.
    async fn send(&self, recipient: &str, message: &str) -> Result<(), String>;
}

/// Notifier that writes messages to the application log.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), String> {
        log::info!("notify {recipient}: {message}");
        Ok(())
    }
}
