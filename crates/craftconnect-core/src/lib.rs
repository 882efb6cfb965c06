//! CraftConnect Core — shared domain abstractions.
//!
//! Defines the aggregate, event, command, clock, RNG and notification seams
//! used by the marketplace and hearts view-state machines. It contains no
//! presentation or runtime code.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod notify;
pub mod rng;
