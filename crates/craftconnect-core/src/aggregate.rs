//! Aggregate root abstraction.

use serde::Serialize;
use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for view-state aggregates that mutate only by applying events.
///
/// State is never persisted: an aggregate applies each event the moment it
/// is recorded and buffers it so the owning controller can observe it.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the current version (number of events applied).
    fn version(&self) -> i64;

    /// Apply an event to mutate internal state.
    fn apply(&mut self, event: &Self::Event);

    /// Returns events recorded since the last drain.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Removes and returns the events recorded since the last drain.
    fn drain_uncommitted_events(&mut self) -> Vec<Self::Event>;
}

/// Outcome of a gated user action.
///
/// Gated actions never fail: an action that is not valid in the current state
/// is ignored and leaves the aggregate untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Transition {
    /// The action changed state and recorded an event.
    Applied,
    /// The action was not valid in the current state.
    Ignored(&'static str),
}

impl Transition {
    /// Returns `true` if the action changed state.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_serializes_with_outcome_tag() {
        let applied = serde_json::to_value(Transition::Applied).unwrap();
        assert_eq!(applied["outcome"], "applied");

        let ignored = serde_json::to_value(Transition::Ignored("no service selected")).unwrap();
        assert_eq!(ignored["outcome"], "ignored");
        assert_eq!(ignored["reason"], "no service selected");
    }

    #[test]
    fn test_is_applied() {
        assert!(Transition::Applied.is_applied());
        assert!(!Transition::Ignored("nope").is_applied());
    }
}
