//! CraftConnect — read-only sample content.
//!
//! Everything here is immutable configuration compiled into the binary: the
//! artisan directory, home-screen service categories, the canned bookings,
//! message threads and profile, and the hearts game message script.

pub mod category;
pub mod fixtures;
pub mod provider;
pub mod script;

use std::sync::Arc;

use craftconnect_core::error::DomainError;

use crate::category::ServiceCategory;
use crate::provider::ServiceProvider;

/// The marketplace directory: providers plus the service categories shown on
/// the home screen.
#[derive(Debug, Clone)]
pub struct Catalog {
    providers: Vec<Arc<ServiceProvider>>,
    categories: Vec<ServiceCategory>,
}

impl Catalog {
    /// Builds a catalog from explicit content.
    #[must_use]
    pub fn new(providers: Vec<ServiceProvider>, categories: Vec<ServiceCategory>) -> Self {
        Self {
            providers: providers.into_iter().map(Arc::new).collect(),
            categories,
        }
    }

    /// The built-in sample directory.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(provider::sample_providers(), category::sample_categories())
    }

    /// All providers in directory order.
    #[must_use]
    pub fn providers(&self) -> &[Arc<ServiceProvider>] {
        &self.providers
    }

    /// All home-screen service categories.
    #[must_use]
    pub fn categories(&self) -> &[ServiceCategory] {
        &self.categories
    }

    /// Looks up a provider by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ProviderNotFound` if no provider has that id.
    pub fn provider(&self, id: u32) -> Result<Arc<ServiceProvider>, DomainError> {
        self.providers
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(DomainError::ProviderNotFound(id))
    }

    /// Providers matching a free-text query on name, specialty, location or
    /// any offered service. A blank query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Arc<ServiceProvider>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.providers.clone();
        }
        self.providers
            .iter()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}
