//! Aggregate root for the hearts game.

use craftconnect_catalog::script::{MessageScript, ScriptedMessage};
use craftconnect_core::aggregate::{AggregateRoot, Transition};
use craftconnect_core::clock::Clock;
use craftconnect_core::event::EventMetadata;
use craftconnect_core::rng::DeterministicRng;
use serde::Serialize;
use uuid::Uuid;

use super::config::GameConfig;
use super::events::{
    GameFinished, GameReset, GameStarted, Heart, HeartCaught, HeartId, HeartSpawned, HeartsEvent,
    HeartsEventKind, HeartsFell,
};

/// Lifecycle of one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Finished,
}

/// The aggregate root for the hearts game.
#[derive(Debug)]
pub struct HeartsGame {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    pub(crate) phase: GamePhase,
    pub(crate) score: usize,
    pub(crate) hearts: Vec<Heart>,
    next_heart_id: u64,
    script: MessageScript,
    /// Events recorded since the last drain.
    uncommitted_events: Vec<HeartsEvent>,
}

impl HeartsGame {
    /// Creates a game that has not started yet.
    #[must_use]
    pub fn new(id: Uuid, script: MessageScript) -> Self {
        Self {
            id,
            version: 0,
            phase: GamePhase::NotStarted,
            score: 0,
            hearts: Vec::new(),
            next_heart_id: 1,
            script,
            uncommitted_events: Vec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Hearts currently in play, oldest first.
    #[must_use]
    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    #[must_use]
    pub fn script(&self) -> &MessageScript {
        &self.script
    }

    /// The message on screen: `script[score]` until the game finishes.
    #[must_use]
    pub fn current_message(&self) -> &ScriptedMessage {
        match self.phase {
            GamePhase::Finished => self.script.finale(),
            GamePhase::NotStarted | GamePhase::Running => self
                .script
                .entry(self.score)
                .unwrap_or_else(|| self.script.finale()),
        }
    }

    /// Begins a round: score 0, first message, empty field.
    pub fn start(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        if self.phase != GamePhase::NotStarted {
            return Transition::Ignored("game already started");
        }
        self.record(
            HeartsEventKind::GameStarted(GameStarted {
                script_length: self.script.len(),
            }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    /// Adds one heart above the viewport at a random column and speed.
    pub fn spawn_heart(
        &mut self,
        rng: &mut dyn DeterministicRng,
        config: &GameConfig,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        if self.phase != GamePhase::Running {
            return Transition::Ignored("game is not running");
        }
        let x = rng.next_u32_range(0, config.max_spawn_x());
        let speed = rng.next_u32_range(config.min_speed, config.max_speed);
        let heart = Heart {
            id: HeartId(self.next_heart_id),
            x,
            y: config.spawn_y(),
            speed,
        };
        self.record(
            HeartsEventKind::HeartSpawned(HeartSpawned { heart }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    /// Moves every heart down by its speed and drops those past the bottom
    /// margin. Dropped hearts do not affect the score.
    pub fn advance(
        &mut self,
        config: &GameConfig,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        if self.phase != GamePhase::Running {
            return Transition::Ignored("game is not running");
        }
        if self.hearts.is_empty() {
            return Transition::Ignored("no hearts in play");
        }
        let despawn_below = config.despawn_below();
        let despawned = self
            .hearts
            .iter()
            .filter(|heart| fallen(heart) > despawn_below)
            .map(|heart| heart.id)
            .collect();
        self.record(
            HeartsEventKind::HeartsFell(HeartsFell {
                despawn_below,
                despawned,
            }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    /// Catches a heart by identity. The catch that brings the score to the
    /// script length also finishes the game.
    pub fn catch(
        &mut self,
        heart_id: HeartId,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        if self.phase != GamePhase::Running {
            return Transition::Ignored("game is not running");
        }
        if !self.hearts.iter().any(|heart| heart.id == heart_id) {
            return Transition::Ignored("heart is not in play");
        }
        let score = self.score + 1;
        self.record(
            HeartsEventKind::HeartCaught(HeartCaught { heart_id, score }),
            correlation_id,
            clock,
        );
        if score >= self.script.len() {
            self.record(
                HeartsEventKind::GameFinished(GameFinished { score }),
                correlation_id,
                clock,
            );
        }
        Transition::Applied
    }

    /// Full reset back to `NotStarted`: score, message and field.
    pub fn reset(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        if self.phase == GamePhase::NotStarted && self.score == 0 && self.hearts.is_empty() {
            return Transition::Ignored("game is already reset");
        }
        self.record(
            HeartsEventKind::GameReset(GameReset {
                hearts_cleared: self.hearts.len(),
            }),
            correlation_id,
            clock,
        );
        Transition::Applied
    }

    fn record(&mut self, kind: HeartsEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = HeartsEvent {
            metadata: EventMetadata::new(
                kind.event_type(),
                self.id,
                self.version + 1,
                correlation_id,
                clock,
            ),
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }
}

/// The heart's y after one more movement tick.
fn fallen(heart: &Heart) -> i32 {
    heart
        .y
        .saturating_add(i32::try_from(heart.speed).unwrap_or(i32::MAX))
}

impl AggregateRoot for HeartsGame {
    type Event = HeartsEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            HeartsEventKind::GameStarted(_) => {
                self.phase = GamePhase::Running;
                self.score = 0;
                self.hearts.clear();
            }
            HeartsEventKind::HeartSpawned(payload) => {
                self.next_heart_id = payload.heart.id.0 + 1;
                self.hearts.push(payload.heart);
            }
            HeartsEventKind::HeartsFell(payload) => {
                for heart in &mut self.hearts {
                    heart.y = fallen(heart);
                }
                self.hearts.retain(|heart| heart.y <= payload.despawn_below);
            }
            HeartsEventKind::HeartCaught(payload) => {
                self.hearts.retain(|heart| heart.id != payload.heart_id);
                self.score = payload.score;
            }
            HeartsEventKind::GameFinished(_) => {
                self.phase = GamePhase::Finished;
            }
            HeartsEventKind::GameReset(_) => {
                self.phase = GamePhase::NotStarted;
                self.score = 0;
                self.hearts.clear();
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn drain_uncommitted_events(&mut self) -> Vec<Self::Event> {
        std::mem::take(&mut self.uncommitted_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftconnect_catalog::script::MessageCategory;
    use craftconnect_core::event::DomainEvent;
    use craftconnect_core::rng::SystemRng;
    use craftconnect_test_support::{FixedClock, MockRng, SequenceRng, fixed_clock};

    fn running_game(clock: &FixedClock) -> HeartsGame {
        let mut game = HeartsGame::new(Uuid::new_v4(), MessageScript::default());
        game.start(Uuid::new_v4(), clock);
        game
    }

    fn spawn(game: &mut HeartsGame, rng: &mut dyn DeterministicRng, clock: &FixedClock) -> HeartId {
        game.spawn_heart(rng, &GameConfig::default(), Uuid::new_v4(), clock);
        game.hearts().last().unwrap().id
    }

    fn event_types(game: &HeartsGame) -> Vec<&'static str> {
        game.uncommitted_events()
            .iter()
            .map(|e| e.event_type())
            .collect()
    }

    // --- start ---

    #[test]
    fn test_start_shows_first_message() {
        // Arrange
        let clock = fixed_clock();
        let mut game = HeartsGame::new(Uuid::new_v4(), MessageScript::default());

        // Act
        let transition = game.start(Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(transition, Transition::Applied);
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.current_message(), MessageScript::default().first());
        assert_eq!(event_types(&game), vec!["hearts.game_started"]);
    }

    #[test]
    fn test_start_twice_is_ignored() {
        let clock = fixed_clock();
        let mut game = running_game(&clock);

        let transition = game.start(Uuid::new_v4(), &clock);

        assert_eq!(transition, Transition::Ignored("game already started"));
        assert_eq!(game.version(), 1);
    }

    // --- spawn_heart ---

    #[test]
    fn test_spawned_hearts_start_above_viewport_within_columns() {
        // Arrange
        let clock = fixed_clock();
        let config = GameConfig::default();
        let mut game = running_game(&clock);
        let mut rng = SystemRng::seeded(42);

        // Act
        for _ in 0..200 {
            game.spawn_heart(&mut rng, &config, Uuid::new_v4(), &clock);
        }

        // Assert
        assert_eq!(game.hearts().len(), 200);
        for heart in game.hearts() {
            assert!(heart.y < 0);
            assert!(heart.x <= config.max_spawn_x());
            assert!((config.min_speed..=config.max_speed).contains(&heart.speed));
        }
    }

    #[test]
    fn test_spawn_uses_rng_for_column_then_speed() {
        let clock = fixed_clock();
        let mut game = running_game(&clock);
        let mut rng = SequenceRng::new(vec![120, 4]);

        spawn(&mut game, &mut rng, &clock);

        let heart = game.hearts()[0];
        assert_eq!(heart.id, HeartId(1));
        assert_eq!(heart.x, 120);
        assert_eq!(heart.speed, 4);
        assert_eq!(heart.y, -40);
    }

    #[test]
    fn test_heart_ids_are_monotonic() {
        let clock = fixed_clock();
        let mut game = running_game(&clock);

        let first = spawn(&mut game, &mut MockRng, &clock);
        let second = spawn(&mut game, &mut MockRng, &clock);

        assert!(second > first);
    }

    #[test]
    fn test_spawn_before_start_is_ignored() {
        let clock = fixed_clock();
        let mut game = HeartsGame::new(Uuid::new_v4(), MessageScript::default());

        let transition =
            game.spawn_heart(&mut MockRng, &GameConfig::default(), Uuid::new_v4(), &clock);

        assert_eq!(transition, Transition::Ignored("game is not running"));
        assert!(game.hearts().is_empty());
    }

    // --- advance ---

    #[test]
    fn test_advance_moves_by_speed_each_tick() {
        // Arrange
        let clock = fixed_clock();
        let config = GameConfig::default();
        let mut game = running_game(&clock);
        spawn(&mut game, &mut MockRng, &clock);
        let y0 = game.hearts()[0].y;
        let speed = game.hearts()[0].speed;

        // Act
        for _ in 0..25 {
            game.advance(&config, Uuid::new_v4(), &clock);
        }

        // Assert
        let expected = y0 + 25 * i32::try_from(speed).unwrap();
        assert_eq!(game.hearts()[0].y, expected);
    }

    #[test]
    fn test_advance_despawns_past_bottom_margin_without_scoring() {
        // Arrange: MockRng spawns at y = -40 with speed 2; the limit is 650.
        let clock = fixed_clock();
        let config = GameConfig::default();
        let mut game = running_game(&clock);
        let id = spawn(&mut game, &mut MockRng, &clock);
        for _ in 0..345 {
            game.advance(&config, Uuid::new_v4(), &clock);
        }
        assert_eq!(game.hearts()[0].y, 650);
        game.drain_uncommitted_events();

        // Act
        game.advance(&config, Uuid::new_v4(), &clock);

        // Assert
        assert!(game.hearts().is_empty());
        assert_eq!(game.score(), 0);
        match &game.uncommitted_events()[0].kind {
            HeartsEventKind::HeartsFell(payload) => assert_eq!(payload.despawned, vec![id]),
            other => panic!("expected HeartsFell, got {other:?}"),
        }
    }

    #[test]
    fn test_advance_with_empty_field_is_ignored() {
        let clock = fixed_clock();
        let mut game = running_game(&clock);

        let transition = game.advance(&GameConfig::default(), Uuid::new_v4(), &clock);

        assert_eq!(transition, Transition::Ignored("no hearts in play"));
    }

    // --- catch ---

    #[test]
    fn test_catch_removes_exactly_that_heart_and_scores_one() {
        // Arrange
        let clock = fixed_clock();
        let mut game = running_game(&clock);
        let first = spawn(&mut game, &mut MockRng, &clock);
        let second = spawn(&mut game, &mut MockRng, &clock);

        // Act
        let transition = game.catch(first, Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(transition, Transition::Applied);
        assert_eq!(game.score(), 1);
        assert_eq!(game.hearts().len(), 1);
        assert_eq!(game.hearts()[0].id, second);
        assert_eq!(game.current_message(), game.script().entry(1).unwrap());
    }

    #[test]
    fn test_catch_same_heart_twice_scores_once() {
        let clock = fixed_clock();
        let mut game = running_game(&clock);
        let id = spawn(&mut game, &mut MockRng, &clock);
        game.catch(id, Uuid::new_v4(), &clock);

        let transition = game.catch(id, Uuid::new_v4(), &clock);

        assert_eq!(transition, Transition::Ignored("heart is not in play"));
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_catch_before_start_is_ignored() {
        let clock = fixed_clock();
        let mut game = HeartsGame::new(Uuid::new_v4(), MessageScript::default());

        let transition = game.catch(HeartId(1), Uuid::new_v4(), &clock);

        assert_eq!(transition, Transition::Ignored("game is not running"));
    }

    #[test]
    fn test_ten_entry_script_finishes_on_tenth_catch_exactly_once() {
        // Arrange
        let clock = fixed_clock();
        let mut game = running_game(&clock);
        let ids: Vec<HeartId> = (0..11)
            .map(|_| spawn(&mut game, &mut MockRng, &clock))
            .collect();

        // Act: nine catches
        for id in &ids[..9] {
            game.catch(*id, Uuid::new_v4(), &clock);
        }

        // Assert
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.current_message(), game.script().entry(9).unwrap());

        // Act: tenth catch
        game.drain_uncommitted_events();
        game.catch(ids[9], Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(game.phase(), GamePhase::Finished);
        assert_eq!(game.score(), 10);
        assert_eq!(game.current_message().category, MessageCategory::Final);
        assert_eq!(
            event_types(&game),
            vec!["hearts.heart_caught", "hearts.game_finished"]
        );

        // A heart still on screen can no longer be caught.
        let late = game.catch(ids[10], Uuid::new_v4(), &clock);
        assert_eq!(late, Transition::Ignored("game is not running"));
        assert_eq!(game.score(), 10);
        assert_eq!(game.hearts().len(), 1);
    }

    #[test]
    fn test_finished_game_stops_spawning_and_movement() {
        let clock = fixed_clock();
        let script = MessageScript::new(
            vec![ScriptedMessage::new("only one", MessageCategory::Intro)],
            ScriptedMessage::new("done", MessageCategory::Final),
        )
        .unwrap();
        let mut game = HeartsGame::new(Uuid::new_v4(), script);
        game.start(Uuid::new_v4(), &clock);
        let id = spawn(&mut game, &mut MockRng, &clock);
        game.catch(id, Uuid::new_v4(), &clock);

        let spawned =
            game.spawn_heart(&mut MockRng, &GameConfig::default(), Uuid::new_v4(), &clock);
        let moved = game.advance(&GameConfig::default(), Uuid::new_v4(), &clock);

        assert_eq!(game.phase(), GamePhase::Finished);
        assert!(!spawned.is_applied());
        assert!(!moved.is_applied());
    }

    // --- reset ---

    #[test]
    fn test_reset_mid_game_returns_to_not_started() {
        let clock = fixed_clock();
        let mut game = running_game(&clock);
        spawn(&mut game, &mut MockRng, &clock);
        spawn(&mut game, &mut MockRng, &clock);
        let id = game.hearts()[0].id;
        game.catch(id, Uuid::new_v4(), &clock);

        let transition = game.reset(Uuid::new_v4(), &clock);

        assert_eq!(transition, Transition::Applied);
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert_eq!(game.score(), 0);
        assert!(game.hearts().is_empty());
        assert_eq!(game.current_message(), game.script().first());
        assert_eq!(game.start(Uuid::new_v4(), &clock), Transition::Applied);
    }

    #[test]
    fn test_reset_of_fresh_game_is_ignored() {
        let clock = fixed_clock();
        let mut game = HeartsGame::new(Uuid::new_v4(), MessageScript::default());

        let transition = game.reset(Uuid::new_v4(), &clock);

        assert_eq!(transition, Transition::Ignored("game is already reset"));
    }
}
