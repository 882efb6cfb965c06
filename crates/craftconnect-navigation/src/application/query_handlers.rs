//! Query handlers for the Navigator.

use serde::Serialize;

use crate::domain::aggregates::Navigator;
use crate::domain::screen::Screen;

/// Read-only view of the navigator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigatorView {
    /// The screen currently showing.
    pub screen: Screen,
    /// Catalog id of the selected provider.
    pub selected_provider_id: Option<u32>,
    /// Home-screen search text.
    pub search_query: String,
    /// Where the back arrow leads, if the header shows one.
    pub back_target: Option<Screen>,
    /// Current version (event count).
    pub version: i64,
}

/// Builds the navigator view.
#[must_use]
pub fn get_navigator_view(navigator: &Navigator) -> NavigatorView {
    NavigatorView {
        screen: navigator.screen,
        selected_provider_id: navigator.selected_provider.as_ref().map(|p| p.id),
        search_query: navigator.search_query.clone(),
        back_target: navigator.screen.back_target(),
        version: navigator.version,
    }
}
