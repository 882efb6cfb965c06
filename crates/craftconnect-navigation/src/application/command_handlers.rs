//! Command handlers for the Navigator.
//!
//! Each handler resolves any catalog references, runs the transition on the
//! aggregate and logs the outcome. Draining events is left to the owner.

use craftconnect_catalog::Catalog;
use craftconnect_core::aggregate::Transition;
use craftconnect_core::clock::Clock;
use craftconnect_core::command::trace_outcome;
use craftconnect_core::error::DomainError;

use crate::domain::aggregates::Navigator;
use crate::domain::commands::{Back, GoTo, SelectProvider, UpdateSearch};

/// Handles `GoTo`.
pub fn handle_go_to(navigator: &mut Navigator, command: &GoTo, clock: &dyn Clock) -> Transition {
    let transition = navigator.go_to(command.screen, command.correlation_id, clock);
    trace_outcome(command, transition);
    transition
}

/// Handles `SelectProvider`: looks the provider up and opens its detail screen.
///
/// # Errors
///
/// Returns `DomainError::ProviderNotFound` if the id is not in the catalog.
pub fn handle_select_provider(
    navigator: &mut Navigator,
    command: &SelectProvider,
    catalog: &Catalog,
    clock: &dyn Clock,
) -> Result<Transition, DomainError> {
    let provider = catalog.provider(command.provider_id)?;
    let transition = navigator.select_provider(provider, command.correlation_id, clock);
    trace_outcome(command, transition);
    Ok(transition)
}

/// Handles `Back`.
pub fn handle_back(navigator: &mut Navigator, command: &Back, clock: &dyn Clock) -> Transition {
    let transition = navigator.back(command.correlation_id, clock);
    trace_outcome(command, transition);
    transition
}

/// Handles `UpdateSearch`.
pub fn handle_update_search(
    navigator: &mut Navigator,
    command: &UpdateSearch,
    clock: &dyn Clock,
) -> Transition {
    let transition = navigator.update_search(command.query.clone(), command.correlation_id, clock);
    trace_outcome(command, transition);
    transition
}
