//! Canned content for the bookings, messages and profile screens.

use serde::Serialize;

/// Status badge of a past or upcoming booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Completed,
}

/// A booking card on the bookings-list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    pub title: &'static str,
    pub status: BookingStatus,
    pub provider_name: &'static str,
    pub when: &'static str,
    pub summary: &'static str,
}

/// A conversation preview on the messages screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageThread {
    pub avatar: &'static str,
    pub provider_name: &'static str,
    pub last_message: &'static str,
    pub received: &'static str,
}

/// The signed-in customer shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: &'static str,
    pub location: &'static str,
    pub notifications_enabled: bool,
    pub location_services_enabled: bool,
}

#[must_use]
pub fn sample_bookings() -> Vec<BookingRecord> {
    vec![
        BookingRecord {
            title: "Electrical Installation",
            status: BookingStatus::Pending,
            provider_name: "Marco Grey",
            when: "Today at 2:00 PM",
            summary: "Solar panel installation for home office",
        },
        BookingRecord {
            title: "Custom Kitchen Cabinets",
            status: BookingStatus::Completed,
            provider_name: "Lyle Witbooi",
            when: "June 15",
            summary: "Custom kitchen cabinet design and installation",
        },
    ]
}

#[must_use]
pub fn sample_threads() -> Vec<MessageThread> {
    vec![
        MessageThread {
            avatar: "👨🏻‍🔧",
            provider_name: "Marco Grey",
            last_message: "I'll be there at 2 PM as scheduled",
            received: "10:30 AM",
        },
        MessageThread {
            avatar: "👨🏽‍🔧",
            provider_name: "Lyle Witbooi",
            last_message: "Thank you for the great review!",
            received: "Yesterday",
        },
    ]
}

#[must_use]
pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: "John Smith",
        location: "Cape Town, Western Cape",
        notifications_enabled: true,
        location_services_enabled: false,
    }
}
