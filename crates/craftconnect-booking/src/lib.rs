//! CraftConnect — Booking Wizard.
//!
//! A three-step linear flow (select service, schedule and location, confirm)
//! gated by a single rule: step 1 needs a service before it can advance.
//! Also hosts [`application::session::MarketplaceSession`], the controller
//! that owns the navigator and the wizard together.

pub mod application;
pub mod domain;
