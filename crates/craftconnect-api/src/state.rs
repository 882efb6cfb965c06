//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use craftconnect_booking::application::session::MarketplaceSession;
use craftconnect_catalog::Catalog;
use craftconnect_core::clock::Clock;
use craftconnect_core::notify::Notifier;
use craftconnect_hearts::application::runner::GameRunner;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single marketplace controller.
    pub session: Arc<Mutex<MarketplaceSession>>,
    /// The hearts game controller.
    pub hearts: Arc<GameRunner>,
    /// Clock for event timestamps.
    pub clock: Arc<dyn Clock>,
    /// Where booking acknowledgments go.
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        hearts: GameRunner,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(MarketplaceSession::new(catalog))),
            hearts: Arc::new(hearts),
            clock,
            notifier,
        }
    }

    /// Locks the marketplace session, recovering from poisoning.
    pub fn session(&self) -> MutexGuard<'_, MarketplaceSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
