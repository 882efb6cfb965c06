//! The marketplace controller.
//!
//! `MarketplaceSession` owns the navigator and the booking wizard. User
//! input arrives as [`MarketplaceAction`] messages; each dispatch runs one
//! command, then drains and logs the events it produced. Wizard actions only
//! take effect while the booking screen is showing.

use std::sync::Arc;

use craftconnect_catalog::Catalog;
use craftconnect_core::aggregate::{AggregateRoot, Transition};
use craftconnect_core::clock::Clock;
use craftconnect_core::error::DomainError;
use craftconnect_core::event::trace_events;
use craftconnect_core::notify::Notifier;
use craftconnect_navigation::application::command_handlers as navigation;
use craftconnect_navigation::domain::aggregates::Navigator;
use craftconnect_navigation::domain::commands::{Back, GoTo, SelectProvider, UpdateSearch};
use craftconnect_navigation::domain::screen::Screen;
use serde::Serialize;
use uuid::Uuid;

use crate::application::command_handlers::{self as booking, BookingReceipt};
use crate::domain::aggregates::BookingWizard;
use crate::domain::commands::{ConfirmAndPay, Continue, DescribeProject, SelectService, SetSchedule};
use crate::domain::step::Schedule;

/// A user input event on the marketplace screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketplaceAction {
    GoTo(Screen),
    SelectProvider(u32),
    Back,
    UpdateSearch(String),
    SelectService(String),
    DescribeProject(String),
    SetSchedule(Schedule),
    Continue,
    ConfirmAndPay,
}

impl MarketplaceAction {
    /// Whether the action is a click on a booking wizard control.
    #[must_use]
    pub fn is_wizard_action(&self) -> bool {
        matches!(
            self,
            Self::SelectService(_)
                | Self::DescribeProject(_)
                | Self::SetSchedule(_)
                | Self::Continue
                | Self::ConfirmAndPay
        )
    }
}

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatched {
    pub correlation_id: Uuid,
    pub transition: Transition,
    /// Present only when a booking was confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<BookingReceipt>,
}

/// Marketplace view state owned by a single controller.
#[derive(Debug)]
pub struct MarketplaceSession {
    catalog: Arc<Catalog>,
    navigator: Navigator,
    wizard: BookingWizard,
}

impl MarketplaceSession {
    /// Starts a session on the home screen.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            navigator: Navigator::new(Uuid::new_v4()),
            wizard: BookingWizard::new(Uuid::new_v4()),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn wizard(&self) -> &BookingWizard {
        &self.wizard
    }

    /// Applies one user action.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` only for input no on-screen control could have
    /// produced (unknown provider, service not offered). Actions that are
    /// merely out of place come back as `Transition::Ignored`.
    pub fn dispatch(
        &mut self,
        action: MarketplaceAction,
        notifier: &dyn Notifier,
        clock: &dyn Clock,
    ) -> Result<Dispatched, DomainError> {
        let correlation_id = Uuid::new_v4();
        let mut receipt = None;

        if action.is_wizard_action() && self.navigator.screen() != Screen::Booking {
            return Ok(Dispatched {
                correlation_id,
                transition: Transition::Ignored("booking wizard is not showing"),
                receipt,
            });
        }

        let transition = match action {
            MarketplaceAction::GoTo(screen) => navigation::handle_go_to(
                &mut self.navigator,
                &GoTo {
                    correlation_id,
                    screen,
                },
                clock,
            ),
            MarketplaceAction::SelectProvider(provider_id) => {
                let command = SelectProvider {
                    correlation_id,
                    provider_id,
                };
                let transition = navigation::handle_select_provider(
                    &mut self.navigator,
                    &command,
                    &self.catalog,
                    clock,
                )?;
                booking::handle_provider_selected(&mut self.wizard, &command, clock);
                transition
            }
            MarketplaceAction::Back => {
                navigation::handle_back(&mut self.navigator, &Back { correlation_id }, clock)
            }
            MarketplaceAction::UpdateSearch(query) => navigation::handle_update_search(
                &mut self.navigator,
                &UpdateSearch {
                    correlation_id,
                    query,
                },
                clock,
            ),
            MarketplaceAction::SelectService(service) => booking::handle_select_service(
                &mut self.wizard,
                &self.navigator,
                &SelectService {
                    correlation_id,
                    service,
                },
                clock,
            )?,
            MarketplaceAction::DescribeProject(description) => booking::handle_describe_project(
                &mut self.wizard,
                &DescribeProject {
                    correlation_id,
                    description,
                },
                clock,
            ),
            MarketplaceAction::SetSchedule(schedule) => booking::handle_set_schedule(
                &mut self.wizard,
                &SetSchedule {
                    correlation_id,
                    schedule,
                },
                clock,
            ),
            MarketplaceAction::Continue => {
                booking::handle_continue(&mut self.wizard, &Continue { correlation_id }, clock)
            }
            MarketplaceAction::ConfirmAndPay => {
                let (transition, confirmed) = booking::handle_confirm_and_pay(
                    &mut self.wizard,
                    &mut self.navigator,
                    &ConfirmAndPay { correlation_id },
                    notifier,
                    clock,
                );
                receipt = confirmed;
                transition
            }
        };

        trace_events(&self.navigator.drain_uncommitted_events());
        trace_events(&self.wizard.drain_uncommitted_events());

        Ok(Dispatched {
            correlation_id,
            transition,
            receipt,
        })
    }
}
