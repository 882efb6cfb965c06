//! The fixed set of full-view screens.

use std::fmt;
use std::str::FromStr;

use craftconnect_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One named full-view UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Home,
    ProviderDetail,
    Booking,
    BookingsList,
    Messages,
    Profile,
}

impl Screen {
    /// Every screen, in bottom-navigation order followed by the drill-downs.
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::BookingsList,
        Screen::Messages,
        Screen::Profile,
        Screen::ProviderDetail,
        Screen::Booking,
    ];

    /// Kebab-case name used at the presentational boundary.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::ProviderDetail => "provider-detail",
            Screen::Booking => "booking",
            Screen::BookingsList => "bookings-list",
            Screen::Messages => "messages",
            Screen::Profile => "profile",
        }
    }

    /// Where the header back arrow leads, if anywhere.
    #[must_use]
    pub fn back_target(self) -> Option<Screen> {
        match self {
            Screen::ProviderDetail => Some(Screen::Home),
            Screen::Booking => Some(Screen::ProviderDetail),
            _ => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| DomainError::UnknownScreen(s.to_owned()))
    }
}
