//! Command abstractions.

use uuid::Uuid;

use crate::aggregate::Transition;

/// A user action dispatched to one of the view-state controllers.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted command name, e.g. `booking.continue`, used in logs.
    fn command_type(&self) -> &'static str;

    /// Correlation ID linking the command to the events it produces.
    fn correlation_id(&self) -> Uuid;
}

/// Logs how a gated command resolved: applied at info, ignored at debug.
pub fn trace_outcome(command: &dyn Command, transition: Transition) {
    match transition {
        Transition::Applied => tracing::info!(
            command_type = command.command_type(),
            correlation_id = %command.correlation_id(),
            "command applied"
        ),
        Transition::Ignored(reason) => tracing::debug!(
            command_type = command.command_type(),
            correlation_id = %command.correlation_id(),
            reason,
            "command ignored"
        ),
    }
}
