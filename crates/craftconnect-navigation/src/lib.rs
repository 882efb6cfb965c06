//! CraftConnect — Navigator.
//!
//! Tracks which screen is showing, which provider the user picked and the
//! home-screen search text. Every transition is total over the screen set.

pub mod application;
pub mod domain;
