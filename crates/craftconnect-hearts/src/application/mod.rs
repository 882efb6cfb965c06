//! Application layer for the hearts game.

pub mod command_handlers;
pub mod query_handlers;
pub mod runner;
