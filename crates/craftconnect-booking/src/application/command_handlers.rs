//! Command handlers for the Booking Wizard.
//!
//! The wizard reads the provider chosen in the navigator and is cleared when
//! a different provider is chosen mid-booking. Confirmation also drives the
//! navigator to the bookings list after notifying the user.

use craftconnect_core::aggregate::Transition;
use craftconnect_core::clock::Clock;
use craftconnect_core::command::trace_outcome;
use craftconnect_core::error::DomainError;
use craftconnect_core::notify::Notifier;
use craftconnect_navigation::domain::aggregates::Navigator;
use craftconnect_navigation::domain::commands::SelectProvider;
use craftconnect_navigation::domain::screen::Screen;
use serde::Serialize;

use crate::domain::aggregates::{BookingSummary, BookingWizard, CONFIRMATION_MESSAGE};
use crate::domain::commands::{ConfirmAndPay, Continue, DescribeProject, SelectService, SetSchedule};
use crate::domain::step::WizardStep;

/// What the user sees after pressing "Confirm & Pay".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingReceipt {
    /// The acknowledgment raised before navigating away.
    pub acknowledgment: &'static str,
    /// The figures that were on screen when the user confirmed.
    pub summary: BookingSummary,
}

/// Handles `SelectService`. On step 1 the service must be one the selected
/// provider offers, since those are the only options on screen.
///
/// # Errors
///
/// Returns `DomainError::Validation` if no provider is selected or the
/// provider does not offer the service.
pub fn handle_select_service(
    wizard: &mut BookingWizard,
    navigator: &Navigator,
    command: &SelectService,
    clock: &dyn Clock,
) -> Result<Transition, DomainError> {
    if wizard.step() != WizardStep::SelectingService {
        let transition = Transition::Ignored("services are chosen on step 1");
        trace_outcome(command, transition);
        return Ok(transition);
    }
    let provider = navigator
        .selected_provider()
        .ok_or_else(|| DomainError::Validation("no provider selected".to_owned()))?;
    if !provider.offers(&command.service) {
        return Err(DomainError::Validation(format!(
            "{} does not offer {:?}",
            provider.name, command.service
        )));
    }
    let transition = wizard.select_service(
        provider.id,
        command.service.clone(),
        command.correlation_id,
        clock,
    );
    trace_outcome(command, transition);
    Ok(transition)
}

/// Runs after the navigator accepted `SelectProvider`: a booking started
/// with another provider is discarded.
pub fn handle_provider_selected(
    wizard: &mut BookingWizard,
    command: &SelectProvider,
    clock: &dyn Clock,
) -> Transition {
    wizard.switch_provider(command.provider_id, command.correlation_id, clock)
}

/// Handles `DescribeProject`.
pub fn handle_describe_project(
    wizard: &mut BookingWizard,
    command: &DescribeProject,
    clock: &dyn Clock,
) -> Transition {
    let transition =
        wizard.describe_project(command.description.clone(), command.correlation_id, clock);
    trace_outcome(command, transition);
    transition
}

/// Handles `SetSchedule`.
pub fn handle_set_schedule(
    wizard: &mut BookingWizard,
    command: &SetSchedule,
    clock: &dyn Clock,
) -> Transition {
    let transition = wizard.set_schedule(command.schedule.clone(), command.correlation_id, clock);
    trace_outcome(command, transition);
    transition
}

/// Handles `Continue`.
pub fn handle_continue(
    wizard: &mut BookingWizard,
    command: &Continue,
    clock: &dyn Clock,
) -> Transition {
    let transition = wizard.continue_step(command.correlation_id, clock);
    trace_outcome(command, transition);
    transition
}

/// Handles `ConfirmAndPay`: pays the fee, raises the acknowledgment, then
/// shows the bookings list. The wizard is back on step 1 afterwards.
///
/// Returns `None` if the wizard is not on step 3 (the button is not shown).
pub fn handle_confirm_and_pay(
    wizard: &mut BookingWizard,
    navigator: &mut Navigator,
    command: &ConfirmAndPay,
    notifier: &dyn Notifier,
    clock: &dyn Clock,
) -> (Transition, Option<BookingReceipt>) {
    let Some(provider) = navigator.selected_provider().cloned() else {
        let transition = Transition::Ignored("no provider selected");
        trace_outcome(command, transition);
        return (transition, None);
    };
    if wizard.provider_id().is_some_and(|id| id != provider.id) {
        let transition = Transition::Ignored("service was chosen from another provider");
        trace_outcome(command, transition);
        return (transition, None);
    }
    let Some(summary) = wizard.summary(&provider) else {
        let transition = Transition::Ignored("booking is not ready for confirmation");
        trace_outcome(command, transition);
        return (transition, None);
    };

    let transition = wizard.confirm_and_pay(&provider, command.correlation_id, clock);
    trace_outcome(command, transition);
    if !transition.is_applied() {
        return (transition, None);
    }

    notifier.notify(CONFIRMATION_MESSAGE);
    navigator.go_to(Screen::BookingsList, command.correlation_id, clock);

    (
        transition,
        Some(BookingReceipt {
            acknowledgment: CONFIRMATION_MESSAGE,
            summary,
        }),
    )
}
