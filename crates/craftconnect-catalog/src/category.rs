//! Home-screen service categories.

use serde::Serialize;

/// A "Popular Services" tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// The six sample categories, in display order.
#[must_use]
pub fn sample_categories() -> Vec<ServiceCategory> {
    [
        ("electrical", "Electrical", "⚡"),
        ("plumbing", "Plumbing", "🔧"),
        ("carpentry", "Carpentry", "🔨"),
        ("painting", "Painting", "🎨"),
        ("tiling", "Tiling", "🏠"),
        ("solar", "Solar", "☀️"),
    ]
    .into_iter()
    .map(|(id, name, icon)| ServiceCategory { id, name, icon })
    .collect()
}
