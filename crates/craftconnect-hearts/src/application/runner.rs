//! The hearts game controller.
//!
//! `GameRunner` owns the game behind a mutex and arms two interval tasks
//! while a round is running: one spawns hearts, the other moves them.
//! Player commands and timer ticks each hold the game lock for a single
//! synchronous mutation, so they serialize in arrival order.
//!
//! Lock order is timers, then game, then rng. Tick tasks never touch the
//! timers lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use craftconnect_catalog::script::MessageScript;
use craftconnect_core::aggregate::{AggregateRoot, Transition};
use craftconnect_core::clock::Clock;
use craftconnect_core::event::trace_events;
use craftconnect_core::rng::DeterministicRng;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use uuid::Uuid;

use crate::application::command_handlers::{
    handle_catch_heart, handle_movement_tick, handle_restart_game, handle_spawn_tick,
    handle_start_game, handle_stop_game,
};
use crate::application::query_handlers::{HeartsView, get_hearts_view};
use crate::domain::aggregates::{GamePhase, HeartsGame};
use crate::domain::commands::{CatchHeart, RestartGame, StartGame, StopGame};
use crate::domain::config::GameConfig;
use crate::domain::events::HeartId;

/// State reachable from the timer tasks.
struct Shared {
    game: Mutex<HeartsGame>,
    rng: Mutex<Box<dyn DeterministicRng>>,
    clock: Arc<dyn Clock>,
    config: GameConfig,
}

impl Shared {
    fn game(&self) -> MutexGuard<'_, HeartsGame> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spawn_tick(&self) {
        let mut game = self.game();
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        handle_spawn_tick(&mut game, &mut **rng, &self.config, self.clock.as_ref());
        trace_events(&game.drain_uncommitted_events());
    }

    fn movement_tick(&self) {
        let mut game = self.game();
        handle_movement_tick(&mut game, &self.config, self.clock.as_ref());
        trace_events(&game.drain_uncommitted_events());
    }
}

/// Both interval tasks of a running round. Dropping the guard aborts both.
struct TimerGuard {
    spawn: JoinHandle<()>,
    movement: JoinHandle<()>,
}

impl TimerGuard {
    fn arm(shared: &Arc<Shared>) -> Self {
        Self {
            spawn: every(shared, shared.config.spawn_period, Shared::spawn_tick),
            movement: every(shared, shared.config.tick_period, Shared::movement_tick),
        }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.spawn.abort();
        self.movement.abort();
        tracing::debug!("hearts timers disarmed");
    }
}

/// Runs `tick` every `period`, first firing one period from now.
fn every(shared: &Arc<Shared>, period: Duration, tick: fn(&Shared)) -> JoinHandle<()> {
    let shared = Arc::clone(shared);
    let period = period.max(Duration::from_millis(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            tick(&shared);
        }
    })
}

/// Controller for one hearts game. Dropping the runner disarms its timers.
pub struct GameRunner {
    shared: Arc<Shared>,
    timers: Mutex<Option<TimerGuard>>,
}

impl GameRunner {
    #[must_use]
    pub fn new(
        script: MessageScript,
        config: GameConfig,
        rng: Box<dyn DeterministicRng>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                game: Mutex::new(HeartsGame::new(Uuid::new_v4(), script)),
                rng: Mutex::new(rng),
                clock,
                config,
            }),
            timers: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.shared.config
    }

    fn timers(&self) -> MutexGuard<'_, Option<TimerGuard>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a round and arms both timers.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> Transition {
        let mut timers = self.timers();
        let mut game = self.shared.game();
        let transition = handle_start_game(
            &mut game,
            &StartGame {
                correlation_id: Uuid::new_v4(),
            },
            self.shared.clock.as_ref(),
        );
        trace_events(&game.drain_uncommitted_events());
        drop(game);

        if transition.is_applied() {
            *timers = Some(TimerGuard::arm(&self.shared));
        }
        transition
    }

    /// Catches a heart. Disarms the timers if this catch finished the game.
    pub fn catch(&self, heart_id: HeartId) -> Transition {
        let mut timers = self.timers();
        let mut game = self.shared.game();
        let transition = handle_catch_heart(
            &mut game,
            &CatchHeart {
                correlation_id: Uuid::new_v4(),
                heart_id,
            },
            self.shared.clock.as_ref(),
        );
        trace_events(&game.drain_uncommitted_events());
        let finished = game.phase() == GamePhase::Finished;
        drop(game);

        if finished {
            *timers = None;
        }
        transition
    }

    /// "Play again": full reset to `NotStarted`.
    pub fn restart(&self) -> Transition {
        let mut timers = self.timers();
        *timers = None;
        let mut game = self.shared.game();
        let transition = handle_restart_game(
            &mut game,
            &RestartGame {
                correlation_id: Uuid::new_v4(),
            },
            self.shared.clock.as_ref(),
        );
        trace_events(&game.drain_uncommitted_events());
        transition
    }

    /// Tears down the timers and resets the game, from any phase.
    pub fn stop(&self) -> Transition {
        let mut timers = self.timers();
        *timers = None;
        let mut game = self.shared.game();
        let transition = handle_stop_game(
            &mut game,
            &StopGame {
                correlation_id: Uuid::new_v4(),
            },
            self.shared.clock.as_ref(),
        );
        trace_events(&game.drain_uncommitted_events());
        transition
    }

    /// Whether the spawn and movement timers are armed.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.timers().is_some()
    }

    #[must_use]
    pub fn view(&self) -> HeartsView {
        let timers = self.timers();
        let game = self.shared.game();
        get_hearts_view(&game, timers.is_some())
    }
}

impl std::fmt::Debug for GameRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRunner")
            .field("config", &self.shared.config)
            .field("ticking", &self.is_ticking())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use craftconnect_catalog::script::{MessageCategory, ScriptedMessage};
    use craftconnect_test_support::{MockRng, fixed_clock};

    use super::*;

    fn runner(script: MessageScript) -> GameRunner {
        GameRunner::new(
            script,
            GameConfig::default(),
            Box::new(MockRng),
            Arc::new(fixed_clock()),
        )
    }

    fn one_entry_script() -> MessageScript {
        MessageScript::new(
            vec![ScriptedMessage::new("catch one", MessageCategory::Intro)],
            ScriptedMessage::new("all done", MessageCategory::Final),
        )
        .unwrap()
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_arms_timers_and_spawns_on_period() {
        // Arrange
        let runner = runner(MessageScript::default());

        // Act
        let transition = runner.start();
        wait(1_400).await;
        let before_spawn = runner.view();
        wait(125).await;
        let after_spawn = runner.view();

        // Assert
        assert_eq!(transition, Transition::Applied);
        assert!(runner.is_ticking());
        assert!(before_spawn.hearts.is_empty());
        assert_eq!(after_spawn.hearts.len(), 1);
        assert!(after_spawn.hearts[0].y < 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_movement_ticks_advance_hearts_by_speed() {
        // Arrange: first heart lands at 1500 ms, MockRng speed is 2.
        let runner = runner(MessageScript::default());
        runner.start();
        wait(1_510).await;
        let y0 = runner.view().hearts[0].y;

        // Act: ten movement ticks at 1550..=2000 ms.
        wait(500).await;

        // Assert
        let view = runner.view();
        assert_eq!(view.hearts.len(), 1);
        assert_eq!(view.hearts[0].y, y0 + 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_final_catch_finishes_and_disarms_timers() {
        // Arrange
        let runner = runner(one_entry_script());
        runner.start();
        wait(3_010).await;
        let view = runner.view();
        assert_eq!(view.hearts.len(), 2);

        // Act
        let transition = runner.catch(view.hearts[0].id);
        wait(5_000).await;

        // Assert
        assert_eq!(transition, Transition::Applied);
        assert!(!runner.is_ticking());
        let finished = runner.view();
        assert_eq!(finished.phase, GamePhase::Finished);
        assert_eq!(finished.score, 1);
        assert_eq!(finished.message.text, "all done");
        assert_eq!(finished.hearts, vec![view.hearts[1]]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_resets_and_disarms_from_running() {
        let runner = runner(MessageScript::default());
        runner.start();
        wait(1_600).await;

        let transition = runner.stop();
        wait(3_000).await;

        assert_eq!(transition, Transition::Applied);
        assert!(!runner.is_ticking());
        let view = runner.view();
        assert_eq!(view.phase, GamePhase::NotStarted);
        assert!(view.hearts.is_empty());
        assert!(!view.timers_active);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_finish_allows_a_new_round() {
        let runner = runner(one_entry_script());
        runner.start();
        wait(1_510).await;
        let id = runner.view().hearts[0].id;
        runner.catch(id);

        let restarted = runner.restart();
        let started = runner.start();

        assert_eq!(restarted, Transition::Applied);
        assert_eq!(started, Transition::Applied);
        assert!(runner.is_ticking());
        let view = runner.view();
        assert_eq!(view.score, 0);
        assert!(view.hearts.is_empty());
        assert_eq!(view.message.text, "catch one");
    }

    #[tokio::test(start_paused = true)]
    async fn test_catch_unknown_heart_is_ignored() {
        let runner = runner(MessageScript::default());
        runner.start();

        let transition = runner.catch(HeartId(99));

        assert_eq!(transition, Transition::Ignored("heart is not in play"));
        assert!(runner.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_while_running_keeps_existing_timers() {
        let runner = runner(MessageScript::default());
        runner.start();
        wait(1_510).await;

        let second = runner.start();

        assert!(!second.is_applied());
        assert_eq!(runner.view().hearts.len(), 1);
    }
}
