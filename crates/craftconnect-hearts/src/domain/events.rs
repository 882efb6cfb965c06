//! Domain events for the hearts game.

use std::fmt;

use craftconnect_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

/// Identity of a falling heart. Monotonic for the lifetime of a game
/// instance, so a stale id from a previous round never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeartId(pub u64);

impl fmt::Display for HeartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A heart in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Heart {
    pub id: HeartId,
    pub x: u32,
    /// Negative while the heart is still above the viewport.
    pub y: i32,
    /// Pixels per movement tick.
    pub speed: u32,
}

/// Emitted when a round begins.
#[derive(Debug, Clone, Serialize)]
pub struct GameStarted {
    pub script_length: usize,
}

/// Emitted on each spawn tick.
#[derive(Debug, Clone, Serialize)]
pub struct HeartSpawned {
    pub heart: Heart,
}

/// Emitted on each movement tick.
#[derive(Debug, Clone, Serialize)]
pub struct HeartsFell {
    pub despawn_below: i32,
    /// Hearts that left the viewport on this tick.
    pub despawned: Vec<HeartId>,
}

/// Emitted when the player catches a heart.
#[derive(Debug, Clone, Serialize)]
pub struct HeartCaught {
    pub heart_id: HeartId,
    /// Score after the catch.
    pub score: usize,
}

/// Emitted when the score reaches the script length.
#[derive(Debug, Clone, Serialize)]
pub struct GameFinished {
    pub score: usize,
}

/// Emitted on restart or stop.
#[derive(Debug, Clone, Serialize)]
pub struct GameReset {
    pub hearts_cleared: usize,
}

/// Event type identifier for [`GameStarted`].
pub const GAME_STARTED_EVENT_TYPE: &str = "hearts.game_started";

/// Event type identifier for [`HeartSpawned`].
pub const HEART_SPAWNED_EVENT_TYPE: &str = "hearts.heart_spawned";

/// Event type identifier for [`HeartsFell`].
pub const HEARTS_FELL_EVENT_TYPE: &str = "hearts.hearts_fell";

/// Event type identifier for [`HeartCaught`].
pub const HEART_CAUGHT_EVENT_TYPE: &str = "hearts.heart_caught";

/// Event type identifier for [`GameFinished`].
pub const GAME_FINISHED_EVENT_TYPE: &str = "hearts.game_finished";

/// Event type identifier for [`GameReset`].
pub const GAME_RESET_EVENT_TYPE: &str = "hearts.game_reset";

/// Event payload variants for the hearts game.
#[derive(Debug, Clone, Serialize)]
pub enum HeartsEventKind {
    GameStarted(GameStarted),
    HeartSpawned(HeartSpawned),
    HeartsFell(HeartsFell),
    HeartCaught(HeartCaught),
    GameFinished(GameFinished),
    GameReset(GameReset),
}

impl HeartsEventKind {
    pub(crate) fn event_type(&self) -> &'static str {
        match self {
            HeartsEventKind::GameStarted(_) => GAME_STARTED_EVENT_TYPE,
            HeartsEventKind::HeartSpawned(_) => HEART_SPAWNED_EVENT_TYPE,
            HeartsEventKind::HeartsFell(_) => HEARTS_FELL_EVENT_TYPE,
            HeartsEventKind::HeartCaught(_) => HEART_CAUGHT_EVENT_TYPE,
            HeartsEventKind::GameFinished(_) => GAME_FINISHED_EVENT_TYPE,
            HeartsEventKind::GameReset(_) => GAME_RESET_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the hearts game.
#[derive(Debug, Clone)]
pub struct HeartsEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: HeartsEventKind,
}

impl DomainEvent for HeartsEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(&self.kind).unwrap_or(serde_json::Value::Null)
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
