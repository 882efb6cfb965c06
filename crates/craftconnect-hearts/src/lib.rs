//! CraftConnect — catch-the-falling-hearts game loop.
//!
//! Hearts spawn on one timer and fall on another while the game runs.
//! Each catch advances a scripted message; catching the last one finishes
//! the game and stops both timers.

pub mod application;
pub mod domain;
