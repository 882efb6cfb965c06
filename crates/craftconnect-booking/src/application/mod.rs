//! Booking command handlers, queries and the marketplace session.

pub mod command_handlers;
pub mod query_handlers;
pub mod session;
