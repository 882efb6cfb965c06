//! Route modules, one per screen group.

pub mod booking;
pub mod health;
pub mod hearts;
pub mod marketplace;
