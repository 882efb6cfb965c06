//! Command handlers for the hearts game.
//!
//! Player commands log through `trace_outcome`; timer ticks fire twenty
//! times a second and log at trace level only.

use craftconnect_core::aggregate::Transition;
use craftconnect_core::clock::Clock;
use craftconnect_core::command::trace_outcome;
use craftconnect_core::rng::DeterministicRng;
use uuid::Uuid;

use crate::domain::aggregates::HeartsGame;
use crate::domain::commands::{CatchHeart, RestartGame, StartGame, StopGame};
use crate::domain::config::GameConfig;

/// Handles `StartGame`.
pub fn handle_start_game(
    game: &mut HeartsGame,
    command: &StartGame,
    clock: &dyn Clock,
) -> Transition {
    let transition = game.start(command.correlation_id, clock);
    trace_outcome(command, transition);
    transition
}

/// Handles `CatchHeart`.
pub fn handle_catch_heart(
    game: &mut HeartsGame,
    command: &CatchHeart,
    clock: &dyn Clock,
) -> Transition {
    let transition = game.catch(command.heart_id, command.correlation_id, clock);
    trace_outcome(command, transition);
    transition
}

/// Handles `RestartGame`.
pub fn handle_restart_game(
    game: &mut HeartsGame,
    command: &RestartGame,
    clock: &dyn Clock,
) -> Transition {
    let transition = game.reset(command.correlation_id, clock);
    trace_outcome(command, transition);
    transition
}

/// Handles `StopGame`. Same reset as restart; the runner also disarms its
/// timers.
pub fn handle_stop_game(
    game: &mut HeartsGame,
    command: &StopGame,
    clock: &dyn Clock,
) -> Transition {
    let transition = game.reset(command.correlation_id, clock);
    trace_outcome(command, transition);
    transition
}

/// One spawn-timer firing.
pub fn handle_spawn_tick(
    game: &mut HeartsGame,
    rng: &mut dyn DeterministicRng,
    config: &GameConfig,
    clock: &dyn Clock,
) -> Transition {
    let transition = game.spawn_heart(rng, config, Uuid::new_v4(), clock);
    tracing::trace!(?transition, hearts = game.hearts().len(), "spawn tick");
    transition
}

/// One movement-timer firing.
pub fn handle_movement_tick(
    game: &mut HeartsGame,
    config: &GameConfig,
    clock: &dyn Clock,
) -> Transition {
    let transition = game.advance(config, Uuid::new_v4(), clock);
    tracing::trace!(?transition, hearts = game.hearts().len(), "movement tick");
    transition
}
