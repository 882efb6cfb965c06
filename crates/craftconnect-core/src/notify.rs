//! User-facing acknowledgment seam.

/// Raises a blocking, user-facing acknowledgment (the booking confirmation
/// alert). Called synchronously before the triggering flow navigates away.
pub trait Notifier: Send + Sync {
    /// Shows `message` to the user.
    fn notify(&self, message: &str);
}

/// Notifier that records acknowledgments in the application log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(message, "user notification");
    }
}
