//! Domain layer for the hearts game.

pub mod aggregates;
pub mod commands;
pub mod config;
pub mod events;
