//! Game loop tuning.

use std::time::Duration;

/// Viewport geometry, heart sizing and timer periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Side length of a heart in pixels.
    pub heart_size: u32,
    /// Slowest fall speed, pixels per movement tick.
    pub min_speed: u32,
    /// Fastest fall speed, pixels per movement tick.
    pub max_speed: u32,
    /// How far below the viewport a heart falls before it is dropped.
    pub despawn_margin: u32,
    pub spawn_period: Duration,
    pub tick_period: Duration,
}

impl GameConfig {
    /// Largest x a heart may spawn at so it stays fully on screen.
    #[must_use]
    pub fn max_spawn_x(&self) -> u32 {
        self.viewport_width.saturating_sub(self.heart_size)
    }

    /// Starting y, one heart-height above the viewport.
    #[must_use]
    pub fn spawn_y(&self) -> i32 {
        -i32::try_from(self.heart_size).unwrap_or(i32::MAX)
    }

    /// Hearts whose y exceeds this are dropped.
    #[must_use]
    pub fn despawn_below(&self) -> i32 {
        i32::try_from(self.viewport_height.saturating_add(self.despawn_margin))
            .unwrap_or(i32::MAX)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 400,
            viewport_height: 600,
            heart_size: 40,
            min_speed: 2,
            max_speed: 5,
            despawn_margin: 50,
            spawn_period: Duration::from_millis(1500),
            tick_period: Duration::from_millis(50),
        }
    }
}
