//! Domain events for the Booking Wizard.

use craftconnect_core::event::{DomainEvent, EventMetadata};
use serde::Serialize;

use super::step::{Schedule, WizardStep};

/// Emitted when a service option is chosen.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceSelected {
    /// The provider whose service list the choice was made from.
    pub provider_id: u32,
    pub service: String,
}

/// Emitted when the project description changes.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDescribed {
    pub description: String,
}

/// Emitted when the step-2 form changes.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSet {
    pub schedule: Schedule,
}

/// Emitted when `continue` moves the wizard forward.
#[derive(Debug, Clone, Serialize)]
pub struct StepAdvanced {
    pub from: WizardStep,
    pub to: WizardStep,
}

/// Emitted when the booking fee is paid. The wizard resets afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmed {
    pub provider_id: u32,
    pub provider_name: String,
    pub service: String,
    pub hourly_rate: u32,
    pub booking_fee: u32,
}

/// Emitted when a different provider is selected while a booking is in
/// progress. The form is cleared and the wizard returns to step 1.
#[derive(Debug, Clone, Serialize)]
pub struct WizardReset {
    pub previous_provider_id: u32,
    pub provider_id: u32,
}

/// Event type identifier for [`ServiceSelected`].
pub const SERVICE_SELECTED_EVENT_TYPE: &str = "booking.service_selected";

/// Event type identifier for [`ProjectDescribed`].
pub const PROJECT_DESCRIBED_EVENT_TYPE: &str = "booking.project_described";

/// Event type identifier for [`ScheduleSet`].
pub const SCHEDULE_SET_EVENT_TYPE: &str = "booking.schedule_set";

/// Event type identifier for [`StepAdvanced`].
pub const STEP_ADVANCED_EVENT_TYPE: &str = "booking.step_advanced";

/// Event type identifier for [`BookingConfirmed`].
pub const BOOKING_CONFIRMED_EVENT_TYPE: &str = "booking.confirmed";

/// Event type identifier for [`WizardReset`].
pub const WIZARD_RESET_EVENT_TYPE: &str = "booking.wizard_reset";

/// Event payload variants for the Booking Wizard.
#[derive(Debug, Clone, Serialize)]
pub enum BookingEventKind {
    ServiceSelected(ServiceSelected),
    ProjectDescribed(ProjectDescribed),
    ScheduleSet(ScheduleSet),
    StepAdvanced(StepAdvanced),
    BookingConfirmed(BookingConfirmed),
    WizardReset(WizardReset),
}

impl BookingEventKind {
    pub(crate) fn event_type(&self) -> &'static str {
        match self {
            BookingEventKind::ServiceSelected(_) => SERVICE_SELECTED_EVENT_TYPE,
            BookingEventKind::ProjectDescribed(_) => PROJECT_DESCRIBED_EVENT_TYPE,
            BookingEventKind::ScheduleSet(_) => SCHEDULE_SET_EVENT_TYPE,
            BookingEventKind::StepAdvanced(_) => STEP_ADVANCED_EVENT_TYPE,
            BookingEventKind::BookingConfirmed(_) => BOOKING_CONFIRMED_EVENT_TYPE,
            BookingEventKind::WizardReset(_) => WIZARD_RESET_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the Booking Wizard.
#[derive(Debug, Clone)]
pub struct BookingEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: BookingEventKind,
}

impl DomainEvent for BookingEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(&self.kind).unwrap_or(serde_json::Value::Null)
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
