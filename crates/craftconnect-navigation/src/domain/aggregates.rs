//! Aggregate root for the Navigator.

use std::sync::Arc;

use craftconnect_catalog::provider::ServiceProvider;
use craftconnect_core::aggregate::{AggregateRoot, Transition};
use craftconnect_core::clock::Clock;
use craftconnect_core::event::EventMetadata;
use uuid::Uuid;

use super::events::{
    NavigationEvent, NavigationEventKind, ProviderSelected, ScreenChanged, SearchUpdated,
};
use super::screen::Screen;

/// Which screen is showing and what the user picked on the way there.
#[derive(Debug)]
pub struct Navigator {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    pub(crate) screen: Screen,
    pub(crate) selected_provider: Option<Arc<ServiceProvider>>,
    pub(crate) search_query: String,
    /// Events recorded since the last drain.
    uncommitted_events: Vec<NavigationEvent>,
}

impl Navigator {
    /// Creates a navigator on the home screen with nothing selected.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            screen: Screen::Home,
            selected_provider: None,
            search_query: String::new(),
            uncommitted_events: Vec::new(),
        }
    }

    /// The screen currently showing.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The provider chosen most recently, if any.
    #[must_use]
    pub fn selected_provider(&self) -> Option<&Arc<ServiceProvider>> {
        self.selected_provider.as_ref()
    }

    /// The home-screen search text.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Shows `screen` unconditionally.
    pub fn go_to(&mut self, screen: Screen, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        self.record(
            NavigationEventKind::ScreenChanged(ScreenChanged {
                from: self.screen,
                to: screen,
            }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    /// Remembers `provider` and opens its detail screen.
    pub fn select_provider(
        &mut self,
        provider: Arc<ServiceProvider>,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        self.record(
            NavigationEventKind::ProviderSelected(ProviderSelected { provider }),
            correlation_id,
            clock,
        );
        self.go_to(Screen::ProviderDetail, correlation_id, clock)
    }

    /// Follows the header back arrow: provider-detail → home,
    /// booking → provider-detail. Ignored on every other screen.
    pub fn back(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        match self.screen.back_target() {
            Some(target) => self.go_to(target, correlation_id, clock),
            None => Transition::Ignored("screen has no back target"),
        }
    }

    /// Records the search text.
    pub fn update_search(
        &mut self,
        query: String,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        self.record(
            NavigationEventKind::SearchUpdated(SearchUpdated { query }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    fn record(&mut self, kind: NavigationEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = NavigationEvent {
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

impl AggregateRoot for Navigator {
    type Event = NavigationEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            NavigationEventKind::ScreenChanged(payload) => {
                self.screen = payload.to;
            }
            NavigationEventKind::ProviderSelected(payload) => {
                self.selected_provider = Some(Arc::clone(&payload.provider));
            }
            NavigationEventKind::SearchUpdated(payload) => {
                self.search_query.clone_from(&payload.query);
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

#[cfg(test)]
mod tests {
    use super::*;
    use craftconnect_catalog::Catalog;
    use craftconnect_core::event::DomainEvent;
    use craftconnect_test_support::fixed_clock;

    fn lyle() -> Arc<ServiceProvider> {
        Catalog::sample().provider(2).unwrap()
    }

    #[test]
    fn test_new_navigator_starts_home_with_nothing_selected() {
        let nav = Navigator::new(Uuid::new_v4());

        assert_eq!(nav.screen(), Screen::Home);
        assert!(nav.selected_provider().is_none());
        assert_eq!(nav.search_query(), "");
        assert_eq!(nav.version(), 0);
    }

    #[test]
    fn test_go_to_sets_screen_unconditionally() {
        let clock = fixed_clock();
        let mut nav = Navigator::new(Uuid::new_v4());

        for screen in Screen::ALL {
            let result = nav.go_to(screen, Uuid::new_v4(), &clock);
            assert_eq!(result, Transition::Applied);
            assert_eq!(nav.screen(), screen);
        }
        assert_eq!(nav.version(), 6);
    }

    #[test]
    fn test_go_to_records_screen_changed_event() {
        let clock = fixed_clock();
        let nav_id = Uuid::new_v4();
        let correlation_id = Uuid::new_v4();
        let mut nav = Navigator::new(nav_id);

        nav.go_to(Screen::Messages, correlation_id, &clock);

        let events = nav.uncommitted_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "navigation.screen_changed");
        let meta = events[0].metadata();
        assert_eq!(meta.aggregate_id, nav_id);
        assert_eq!(meta.sequence_number, 1);
        assert_eq!(meta.correlation_id, correlation_id);
        assert_eq!(meta.occurred_at, clock.0);
        assert_eq!(
            events[0].to_payload(),
            serde_json::json!({ "ScreenChanged": { "from": "home", "to": "messages" } })
        );
    }

    #[test]
    fn test_select_provider_sets_provider_and_opens_detail() {
        let clock = fixed_clock();
        let mut nav = Navigator::new(Uuid::new_v4());
        let provider = lyle();

        let result = nav.select_provider(Arc::clone(&provider), Uuid::new_v4(), &clock);

        assert_eq!(result, Transition::Applied);
        assert_eq!(nav.screen(), Screen::ProviderDetail);
        assert!(Arc::ptr_eq(nav.selected_provider().unwrap(), &provider));

        let types: Vec<_> = nav
            .uncommitted_events()
            .iter()
            .map(|e| e.event_type())
            .collect();
        assert_eq!(
            types,
            vec!["navigation.provider_selected", "navigation.screen_changed"]
        );
        assert_eq!(
            nav.uncommitted_events()[0].to_payload(),
            serde_json::json!({ "ProviderSelected": { "provider_id": 2 } })
        );
    }

    #[test]
    fn test_back_from_detail_goes_home() {
        let clock = fixed_clock();
        let mut nav = Navigator::new(Uuid::new_v4());
        nav.select_provider(lyle(), Uuid::new_v4(), &clock);

        assert_eq!(nav.back(Uuid::new_v4(), &clock), Transition::Applied);
        assert_eq!(nav.screen(), Screen::Home);
    }

    #[test]
    fn test_back_from_booking_goes_to_detail() {
        let clock = fixed_clock();
        let mut nav = Navigator::new(Uuid::new_v4());
        nav.go_to(Screen::Booking, Uuid::new_v4(), &clock);

        assert_eq!(nav.back(Uuid::new_v4(), &clock), Transition::Applied);
        assert_eq!(nav.screen(), Screen::ProviderDetail);
    }

    #[test]
    fn test_back_elsewhere_is_ignored_without_event() {
        let clock = fixed_clock();
        for screen in [
            Screen::Home,
            Screen::BookingsList,
            Screen::Messages,
            Screen::Profile,
        ] {
            let mut nav = Navigator::new(Uuid::new_v4());
            nav.go_to(screen, Uuid::new_v4(), &clock);
            nav.drain_uncommitted_events();
            let version = nav.version();

            let result = nav.back(Uuid::new_v4(), &clock);

            assert!(matches!(result, Transition::Ignored(_)));
            assert_eq!(nav.screen(), screen);
            assert_eq!(nav.version(), version);
            assert!(nav.uncommitted_events().is_empty());
        }
    }

    #[test]
    fn test_update_search_records_query() {
        let clock = fixed_clock();
        let mut nav = Navigator::new(Uuid::new_v4());

        nav.update_search("solar".to_owned(), Uuid::new_v4(), &clock);

        assert_eq!(nav.search_query(), "solar");
        assert_eq!(nav.screen(), Screen::Home);
    }

    #[test]
    fn test_drain_empties_buffer_and_keeps_version() {
        let clock = fixed_clock();
        let mut nav = Navigator::new(Uuid::new_v4());
        nav.go_to(Screen::Profile, Uuid::new_v4(), &clock);
        nav.go_to(Screen::Home, Uuid::new_v4(), &clock);

        let drained = nav.drain_uncommitted_events();

        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].metadata().sequence_number, 2);
        assert!(nav.uncommitted_events().is_empty());
        assert_eq!(nav.version(), 2);
    }
}
