//! Commands for the hearts game. Timer ticks are not commands; the runner
//! drives them directly.

use craftconnect_core::command::Command;
use uuid::Uuid;

use super::events::HeartId;

/// Command issued by the start button.
#[derive(Debug, Clone)]
pub struct StartGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for StartGame {
    fn command_type(&self) -> &'static str {
        "hearts.start"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command issued when the player taps a heart.
#[derive(Debug, Clone)]
pub struct CatchHeart {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The tapped heart.
    pub heart_id: HeartId,
}

impl Command for CatchHeart {
    fn command_type(&self) -> &'static str {
        "hearts.catch"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command issued by the "play again" button.
#[derive(Debug, Clone)]
pub struct RestartGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for RestartGame {
    fn command_type(&self) -> &'static str {
        "hearts.restart"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command issued when the game view goes away.
#[derive(Debug, Clone)]
pub struct StopGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for StopGame {
    fn command_type(&self) -> &'static str {
        "hearts.stop"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
