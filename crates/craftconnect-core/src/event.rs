//! Domain event abstractions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;

/// Metadata attached to every domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Dotted event type name.
    pub event_type: String,
    /// Aggregate this event belongs to.
    pub aggregate_id: Uuid,
    /// Monotonically increasing version within the aggregate.
    pub sequence_number: i64,
    /// Correlation ID of the command (or timer tick) that caused the event.
    pub correlation_id: Uuid,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    /// Builds metadata for a freshly recorded event.
    #[must_use]
    pub fn new(
        event_type: &str,
        aggregate_id: Uuid,
        sequence_number: i64,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type: event_type.to_owned(),
            aggregate_id,
            sequence_number,
            correlation_id,
            occurred_at: clock.now(),
        }
    }
}

/// Trait that all domain events implement.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Serializes the event payload to JSON.
    fn to_payload(&self) -> serde_json::Value;

    /// Returns the metadata for this event.
    fn metadata(&self) -> &EventMetadata;
}

/// Logs drained events at debug level.
pub fn trace_events<E: DomainEvent>(events: &[E]) {
    for event in events {
        let meta = event.metadata();
        tracing::debug!(
            event_type = event.event_type(),
            aggregate_id = %meta.aggregate_id,
            sequence_number = meta.sequence_number,
            correlation_id = %meta.correlation_id,
            payload = %event.to_payload(),
            "domain event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Frozen(DateTime<Utc>);

    impl Clock for Frozen {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_metadata_new_stamps_clock_time_and_ids() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let aggregate_id = Uuid::new_v4();
        let correlation_id = Uuid::new_v4();

        let meta = EventMetadata::new(
            "navigation.screen_changed",
            aggregate_id,
            3,
            correlation_id,
            &Frozen(now),
        );

        assert_eq!(meta.event_type, "navigation.screen_changed");
        assert_eq!(meta.aggregate_id, aggregate_id);
        assert_eq!(meta.sequence_number, 3);
        assert_eq!(meta.correlation_id, correlation_id);
        assert_eq!(meta.occurred_at, now);
    }
}
