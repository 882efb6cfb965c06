//! Shared test doubles for the CraftConnect demos.

mod clock;
mod notifier;
mod rng;

pub use clock::{FixedClock, fixed_clock};
pub use notifier::RecordingNotifier;
pub use rng::{MockRng, SequenceRng};
