//! Service providers ("artisans") listed in the marketplace.

use serde::Serialize;

/// A tradesperson available for booking. Immutable sample data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceProvider {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    /// Hourly rate in Rand.
    pub hourly_rate: u32,
    pub avatar: String,
    pub verified: bool,
    /// Offered services, in display order.
    pub services: Vec<String>,
    pub portfolio: u32,
    pub description: String,
}

impl ServiceProvider {
    /// Returns `true` if `service` is one of the offerings.
    #[must_use]
    pub fn offers(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    /// Case-insensitive match against an already-lowercased needle.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.specialty, &self.location]
            .into_iter()
            .chain(self.services.iter())
            .any(|field| field.to_lowercase().contains(needle))
    }
}

fn services(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

/// The three sample artisans.
#[must_use]
pub fn sample_providers() -> Vec<ServiceProvider> {
    vec![
        ServiceProvider {
            id: 1,
            name: "Marco Grey".to_owned(),
            specialty: "Electrical & Solar".to_owned(),
            rating: 4.9,
            reviews: 127,
            location: "Sandton, Johannesburg".to_owned(),
            hourly_rate: 350,
            avatar: "👨🏻‍🔧".to_owned(),
            verified: true,
            services: services(&[
                "Electrical wiring",
                "Solar installations",
                "Home automation",
            ]),
            portfolio: 3,
            description: "Certified electrician with 8+ years experience. Specializing in \
                          solar power and smart home systems."
                .to_owned(),
        },
        ServiceProvider {
            id: 2,
            name: "Lyle Witbooi".to_owned(),
            specialty: "Carpentry & Furniture".to_owned(),
            rating: 4.8,
            reviews: 89,
            location: "Cape Town, Western Cape".to_owned(),
            hourly_rate: 320,
            avatar: "👨🏽‍🔧".to_owned(),
            verified: true,
            services: services(&["Custom furniture", "Kitchen cabinets", "Wood flooring"]),
            portfolio: 5,
            description: "Master carpenter specializing in custom furniture and cabinetry. \
                          Known for quality craftsmanship and reliable service."
                .to_owned(),
        },
        ServiceProvider {
            id: 3,
            name: "James Ndlovu".to_owned(),
            specialty: "Carpentry & Furniture".to_owned(),
            rating: 4.9,
            reviews: 156,
            location: "Durban, KwaZulu-Natal".to_owned(),
            hourly_rate: 280,
            avatar: "👨🏿‍🔧".to_owned(),
            verified: true,
            services: services(&["Custom furniture", "Kitchen cabinets", "Wood flooring"]),
            portfolio: 8,
            description: "Skilled carpenter creating custom furniture and cabinetry. \
                          12 years of experience in fine woodworking."
                .to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offers_requires_exact_service_name() {
        let lyle = &sample_providers()[1];

        assert!(lyle.offers("Kitchen cabinets"));
        assert!(!lyle.offers("kitchen cabinets"));
        assert!(!lyle.offers("Electrical wiring"));
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let providers = sample_providers();
        let mut ids: Vec<u32> = providers.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), providers.len());
    }
}
