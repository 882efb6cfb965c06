//! Commands for the Navigator.

use craftconnect_core::command::Command;
use uuid::Uuid;

use super::screen::Screen;

/// Command to show a screen (bottom navigation, "Book Now").
#[derive(Debug, Clone)]
pub struct GoTo {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The screen to show.
    pub screen: Screen,
}

impl Command for GoTo {
    fn command_type(&self) -> &'static str {
        "navigation.go_to"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command issued when a provider card is tapped.
#[derive(Debug, Clone)]
pub struct SelectProvider {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Catalog id of the tapped provider.
    pub provider_id: u32,
}

impl Command for SelectProvider {
    fn command_type(&self) -> &'static str {
        "navigation.select_provider"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command issued by the header back arrow.
#[derive(Debug, Clone)]
pub struct Back {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for Back {
    fn command_type(&self) -> &'static str {
        "navigation.back"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command issued as the user types in the home search bar.
#[derive(Debug, Clone)]
pub struct UpdateSearch {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The full text of the search box.
    pub query: String,
}

impl Command for UpdateSearch {
    fn command_type(&self) -> &'static str {
        "navigation.update_search"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
