//! Domain events for the Navigator.

use std::sync::Arc;

use craftconnect_catalog::provider::ServiceProvider;
use craftconnect_core::event::{DomainEvent, EventMetadata};
use serde::{Serialize, Serializer};

use super::screen::Screen;

/// Emitted whenever the visible screen changes.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenChanged {
    /// The screen that was showing.
    pub from: Screen,
    /// The screen now showing.
    pub to: Screen,
}

/// Emitted when a provider card is tapped.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSelected {
    /// The chosen provider, shared read-only with the catalog.
    #[serde(rename = "provider_id", serialize_with = "serialize_provider_id")]
    pub provider: Arc<ServiceProvider>,
}

/// Emitted when the search text changes.
#[derive(Debug, Clone, Serialize)]
pub struct SearchUpdated {
    /// The new search text.
    pub query: String,
}

fn serialize_provider_id<S: Serializer>(
    provider: &Arc<ServiceProvider>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(provider.id)
}

/// Event type identifier for [`ScreenChanged`].
pub const SCREEN_CHANGED_EVENT_TYPE: &str = "navigation.screen_changed";

/// Event type identifier for [`ProviderSelected`].
pub const PROVIDER_SELECTED_EVENT_TYPE: &str = "navigation.provider_selected";

/// Event type identifier for [`SearchUpdated`].
pub const SEARCH_UPDATED_EVENT_TYPE: &str = "navigation.search_updated";

/// Event payload variants for the Navigator.
#[derive(Debug, Clone, Serialize)]
pub enum NavigationEventKind {
    /// The visible screen changed.
    ScreenChanged(ScreenChanged),
    /// A provider was chosen.
    ProviderSelected(ProviderSelected),
    /// The search text changed.
    SearchUpdated(SearchUpdated),
}

impl NavigationEventKind {
    pub(crate) fn event_type(&self) -> &'static str {
        match self {
            NavigationEventKind::ScreenChanged(_) => SCREEN_CHANGED_EVENT_TYPE,
            NavigationEventKind::ProviderSelected(_) => PROVIDER_SELECTED_EVENT_TYPE,
            NavigationEventKind::SearchUpdated(_) => SEARCH_UPDATED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the Navigator.
#[derive(Debug, Clone)]
pub struct NavigationEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: NavigationEventKind,
}

impl DomainEvent for NavigationEvent {
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
