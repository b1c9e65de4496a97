use async_trait::async_trait;
use tracing::info;

/// Outbound notification port. Infallible by signature: a failed delivery
/// after the appointment is stored has no compensating action.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, email: &str, message: &str);
}

/// Reference delivery channel: a structured log line.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, email: &str, message: &str) {
        info!("Notification sent to {}: {}", email, message);
    }
}
