//! Aggregate root for the Booking Wizard.

use craftconnect_catalog::provider::ServiceProvider;
use craftconnect_core::aggregate::{AggregateRoot, Transition};
use craftconnect_core::clock::Clock;
use craftconnect_core::event::EventMetadata;
use serde::Serialize;
use uuid::Uuid;

use super::events::{
    BookingConfirmed, BookingEvent, BookingEventKind, ProjectDescribed, ScheduleSet,
    ServiceSelected, StepAdvanced, WizardReset,
};
use super::step::{Schedule, WizardStep};

/// Flat booking fee in Rand, charged at confirmation.
pub const BOOKING_FEE: u32 = 25;

/// Acknowledgment shown when a booking is confirmed.
pub const CONFIRMATION_MESSAGE: &str = "Booking confirmed! The artisan will contact you shortly.";

/// Figures shown on the confirmation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub provider_name: String,
    pub service: String,
    /// Estimated hourly rate in Rand.
    pub hourly_rate: u32,
    pub booking_fee: u32,
    /// Amount payable now; the project cost is agreed with the artisan later.
    pub total_due_now: u32,
}

/// The aggregate root for the booking flow.
#[derive(Debug)]
pub struct BookingWizard {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    pub(crate) step: WizardStep,
    /// Provider the selected service belongs to.
    pub(crate) provider_id: Option<u32>,
    pub(crate) selected_service: Option<String>,
    pub(crate) project_description: String,
    pub(crate) schedule: Schedule,
    /// Events recorded since the last drain.
    uncommitted_events: Vec<BookingEvent>,
}

impl BookingWizard {
    /// Creates a wizard on step 1 with an empty form.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            step: WizardStep::SelectingService,
            provider_id: None,
            selected_service: None,
            project_description: String::new(),
            schedule: Schedule::default(),
            uncommitted_events: Vec::new(),
        }
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The provider the booking is being made with, once a service is chosen.
    #[must_use]
    pub fn provider_id(&self) -> Option<u32> {
        self.provider_id
    }

    #[must_use]
    pub fn selected_service(&self) -> Option<&str> {
        self.selected_service.as_deref()
    }

    #[must_use]
    pub fn project_description(&self) -> &str {
        &self.project_description
    }

    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Whether the "Continue" button is enabled.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        match self.step {
            WizardStep::SelectingService => self.selected_service.is_some(),
            WizardStep::SchedulingLocation => true,
            WizardStep::Confirming => false,
        }
    }

    /// Records the chosen service of `provider_id`. Does not advance.
    pub fn select_service(
        &mut self,
        provider_id: u32,
        service: String,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        if self.step != WizardStep::SelectingService {
            return Transition::Ignored("services are chosen on step 1");
        }
        if service.trim().is_empty() {
            return Transition::Ignored("service name is blank");
        }
        self.record(
            BookingEventKind::ServiceSelected(ServiceSelected {
                provider_id,
                service,
            }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    /// Records the project description (step 1).
    pub fn describe_project(
        &mut self,
        description: String,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        if self.step != WizardStep::SelectingService {
            return Transition::Ignored("the project is described on step 1");
        }
        self.record(
            BookingEventKind::ProjectDescribed(ProjectDescribed { description }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    /// Records the date, time slot and address (step 2). Not validated.
    pub fn set_schedule(
        &mut self,
        schedule: Schedule,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        if self.step != WizardStep::SchedulingLocation {
            return Transition::Ignored("the schedule is set on step 2");
        }
        self.record(
            BookingEventKind::ScheduleSet(ScheduleSet { schedule }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    /// Moves to the next step. Step 1 needs a selected service; step 2
    /// advances unconditionally; step 3 only exits through confirmation.
    pub fn continue_step(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        if !self.can_continue() {
            return match self.step {
                WizardStep::SelectingService => Transition::Ignored("no service selected"),
                _ => Transition::Ignored("booking awaits confirmation"),
            };
        }
        let Some(to) = self.step.next() else {
            return Transition::Ignored("booking awaits confirmation");
        };
        self.record(
            BookingEventKind::StepAdvanced(StepAdvanced {
                from: self.step,
                to,
            }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    /// Clears the form when `provider_id` is not the provider the service
    /// was chosen from. A wizard with no service chosen is left as is.
    pub fn switch_provider(
        &mut self,
        provider_id: u32,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        let Some(previous_provider_id) = self.provider_id else {
            return Transition::Ignored("no booking in progress");
        };
        if previous_provider_id == provider_id {
            return Transition::Ignored("same provider");
        }
        self.record(
            BookingEventKind::WizardReset(WizardReset {
                previous_provider_id,
                provider_id,
            }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    /// The confirmation figures, available on step 3 only and only for the
    /// provider the service was chosen from.
    #[must_use]
    pub fn summary(&self, provider: &ServiceProvider) -> Option<BookingSummary> {
        if self.step != WizardStep::Confirming || self.provider_id != Some(provider.id) {
            return None;
        }
        let service = self.selected_service.clone()?;
        Some(BookingSummary {
            provider_name: provider.name.clone(),
            service,
            hourly_rate: provider.hourly_rate,
            booking_fee: BOOKING_FEE,
            total_due_now: BOOKING_FEE,
        })
    }

    /// Pays the booking fee. Valid on step 3 only; the wizard returns to an
    /// empty step 1 afterwards.
    pub fn confirm_and_pay(
        &mut self,
        provider: &ServiceProvider,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        let Some(summary) = self.summary(provider) else {
            return Transition::Ignored("booking is not ready for confirmation");
        };
        self.record(
            BookingEventKind::BookingConfirmed(BookingConfirmed {
                provider_id: provider.id,
                provider_name: summary.provider_name,
                service: summary.service,
                hourly_rate: summary.hourly_rate,
                booking_fee: summary.booking_fee,
            }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    fn clear(&mut self) {
        self.step = WizardStep::SelectingService;
        self.provider_id = None;
        self.selected_service = None;
        self.project_description.clear();
        self.schedule = Schedule::default();
    }

    fn record(&mut self, kind: BookingEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = BookingEvent {
            metadata: EventMetadata::new(
                kind.event_type(),
                self.id,
                self.version + 1,
                correlation_id,
                clock,
            ),
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }
}

impl AggregateRoot for BookingWizard {
    type Event = BookingEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            BookingEventKind::ServiceSelected(payload) => {
                self.provider_id = Some(payload.provider_id);
                self.selected_service = Some(payload.service.clone());
            }
            BookingEventKind::ProjectDescribed(payload) => {
                self.project_description.clone_from(&payload.description);
            }
            BookingEventKind::ScheduleSet(payload) => {
                self.schedule = payload.schedule.clone();
            }
            BookingEventKind::StepAdvanced(payload) => {
                self.step = payload.to;
            }
            BookingEventKind::BookingConfirmed(_) | BookingEventKind::WizardReset(_) => {
                self.clear();
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn drain_uncommitted_events(&mut self) -> Vec<Self::Event> {
        std::mem::take(&mut self.uncommitted_events)
    }
}
