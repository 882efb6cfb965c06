//! Query handlers: the booking wizard view and the per-screen marketplace
//! view models.

use craftconnect_catalog::category::ServiceCategory;
use craftconnect_catalog::fixtures::{
    BookingRecord, MessageThread, UserProfile, sample_bookings, sample_profile, sample_threads,
};
use craftconnect_catalog::provider::ServiceProvider;
use craftconnect_navigation::application::query_handlers::{NavigatorView, get_navigator_view};
use craftconnect_navigation::domain::aggregates::Navigator;
use craftconnect_navigation::domain::screen::Screen;
use serde::Serialize;

use crate::application::session::MarketplaceSession;
use crate::domain::aggregates::{BookingSummary, BookingWizard};
use crate::domain::step::{Schedule, WizardStep};

/// Read-only view of the booking wizard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingView {
    /// 1-based step number for the progress bar.
    pub step_number: u8,
    pub step: WizardStep,
    pub provider_name: Option<String>,
    /// Service options shown on step 1.
    pub available_services: Vec<String>,
    pub selected_service: Option<String>,
    pub project_description: String,
    pub schedule: Schedule,
    pub time_slot_label: &'static str,
    /// Whether the "Continue" button is enabled.
    pub can_continue: bool,
    /// Present on step 3.
    pub summary: Option<BookingSummary>,
}

/// Builds the wizard view against the navigator's selected provider.
#[must_use]
pub fn get_booking_view(wizard: &BookingWizard, navigator: &Navigator) -> BookingView {
    let provider = navigator.selected_provider();
    BookingView {
        step_number: wizard.step().number(),
        step: wizard.step(),
        provider_name: provider.map(|p| p.name.clone()),
        available_services: provider.map(|p| p.services.clone()).unwrap_or_default(),
        selected_service: wizard.selected_service().map(str::to_owned),
        project_description: wizard.project_description().to_owned(),
        schedule: wizard.schedule().clone(),
        time_slot_label: wizard.schedule().slot.label(),
        can_continue: wizard.can_continue(),
        summary: provider.and_then(|p| wizard.summary(p)),
    }
}

/// Content of the screen currently showing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenContent {
    Home {
        categories: Vec<ServiceCategory>,
        /// Providers matching the search text.
        providers: Vec<ServiceProvider>,
    },
    ProviderDetail {
        provider: Option<ServiceProvider>,
    },
    Booking {
        booking: BookingView,
    },
    BookingsList {
        bookings: Vec<BookingRecord>,
    },
    Messages {
        threads: Vec<MessageThread>,
    },
    Profile {
        profile: UserProfile,
    },
}

/// The full marketplace view: navigation state plus screen content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketplaceView {
    pub navigation: NavigatorView,
    pub content: ScreenContent,
}

/// Renders the session into a view model.
#[must_use]
pub fn get_marketplace_view(session: &MarketplaceSession) -> MarketplaceView {
    let navigator = session.navigator();
    let content = match navigator.screen() {
        Screen::Home => ScreenContent::Home {
            categories: session.catalog().categories().to_vec(),
            providers: session
                .catalog()
                .search(navigator.search_query())
                .iter()
                .map(|p| p.as_ref().clone())
                .collect(),
        },
        Screen::ProviderDetail => ScreenContent::ProviderDetail {
            provider: navigator
                .selected_provider()
                .map(|p| p.as_ref().clone()),
        },
        Screen::Booking => ScreenContent::Booking {
            booking: get_booking_view(session.wizard(), navigator),
        },
        Screen::BookingsList => ScreenContent::BookingsList {
            bookings: sample_bookings(),
        },
        Screen::Messages => ScreenContent::Messages {
            threads: sample_threads(),
        },
        Screen::Profile => ScreenContent::Profile {
            profile: sample_profile(),
        },
    };

    MarketplaceView {
        navigation: get_navigator_view(navigator),
        content,
    }
}
