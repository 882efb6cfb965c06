//! Query handlers for the hearts game.

use craftconnect_catalog::script::ScriptedMessage;
use serde::Serialize;

use crate::domain::aggregates::{GamePhase, HeartsGame};
use crate::domain::events::Heart;

/// Read-only snapshot of the game screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartsView {
    pub phase: GamePhase,
    pub score: usize,
    /// Catches needed to finish.
    pub target: usize,
    pub message: ScriptedMessage,
    pub hearts: Vec<Heart>,
    /// Whether the spawn and movement timers are armed.
    pub timers_active: bool,
}

/// Builds the view from the game state and the runner's timer status.
#[must_use]
pub fn get_hearts_view(game: &HeartsGame, timers_active: bool) -> HeartsView {
    HeartsView {
        phase: game.phase(),
        score: game.score(),
        target: game.script().len(),
        message: game.current_message().clone(),
        hearts: game.hearts().to_vec(),
        timers_active,
    }
}
