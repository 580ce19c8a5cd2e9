//! Game session - orchestrates spawn, fall, lock, clear and respawn
//!
//! A session owns the field, the active piece, the score tracker, the preview
//! queue and the fall/rotation timers. The frame driver feeds it inputs and
//! elapsed time; renderers read [`GameSnapshot`]s and the audio layer drains
//! [`GameEvent`]s.
//!
//! ```text
//! NotStarted --start--> Running <--toggle_pause--> Paused
//!                          |
//!                    spawn failure
//!                          v
//!                      GameOver --restart--> Running
//! ```

use crate::config::GameConfig;
use crate::field::Field;
use crate::kicks;
use crate::line_clear;
use crate::piece::Piece;
use crate::rng::NextQueue;
use crate::scoring::{next_drop_interval_ms, Score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::stats::GameStats;
use crate::timer::Timer;
use crate::types::{GameAction, GameEvent, ShapeKind};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: SessionState,
    field: Field,
    active: Option<Piece>,
    queue: NextQueue,
    score: Score,
    fall_timer: Timer,
    rotate_cooldown: Timer,
    /// Level-derived fall interval (fast drop does not change it)
    base_drop_ms: u32,
    fast_drop: bool,
    next_block_id: u32,
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            queue: NextQueue::new(config.seed),
            fall_timer: Timer::repeating(config.initial_drop_ms),
            rotate_cooldown: Timer::one_shot(config.rotate_cooldown_ms),
            base_drop_ms: config.initial_drop_ms,
            config,
            state: SessionState::NotStarted,
            field: Field::new(),
            active: None,
            score: Score::new(),
            fast_drop: false,
            next_block_id: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next_queue(&self) -> [ShapeKind; 3] {
        self.queue.peek()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Interval the fall timer currently runs at.
    pub fn drop_interval_ms(&self) -> u32 {
        if self.fast_drop {
            self.config.fast_drop_ms
        } else {
            self.base_drop_ms
        }
    }

    pub fn base_drop_ms(&self) -> u32 {
        self.base_drop_ms
    }

    pub fn is_fast_drop(&self) -> bool {
        self.fast_drop
    }

    /// Begin the first game. Only valid before any game has started.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::NotStarted {
            return false;
        }
        self.new_game();
        true
    }

    /// Begin a fresh game after game over.
    pub fn restart(&mut self) -> bool {
        if self.state != SessionState::GameOver {
            return false;
        }
        self.new_game();
        true
    }

    fn new_game(&mut self) {
        self.field.reset();
        self.score.reset();
        self.queue.refill();
        self.active = None;
        self.events.clear();
        self.fast_drop = false;
        self.base_drop_ms = self.config.initial_drop_ms;
        self.fall_timer.set_interval(self.base_drop_ms);
        self.fall_timer.start();
        self.rotate_cooldown.stop();
        self.state = SessionState::Running;
        self.spawn_next();
    }

    /// Running <-> Paused. Timers freeze with their remaining delay.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            SessionState::Running => {
                self.state = SessionState::Paused;
                self.fall_timer.pause();
                self.rotate_cooldown.pause();
                true
            }
            SessionState::Paused => {
                self.state = SessionState::Running;
                self.fall_timer.resume();
                self.rotate_cooldown.resume();
                true
            }
            _ => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, direction: i8) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if piece.would_collide_horizontally(direction, &self.field) {
            return false;
        }
        if direction < 0 {
            piece.move_left();
        } else {
            piece.move_right();
        }
        self.events.push(GameEvent::PieceMoved);
        true
    }

    /// Rotate clockwise through the kick resolver.
    ///
    /// Rejected while the rotation cooldown is still running.
    pub fn rotate(&mut self) -> bool {
        if self.state != SessionState::Running || self.rotate_cooldown.is_running() {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if kicks::try_rotate(piece, &self.field).is_none() {
            return false;
        }
        self.rotate_cooldown.set_interval(self.config.rotate_cooldown_ms);
        self.rotate_cooldown.start();
        self.events.push(GameEvent::PieceRotated);
        true
    }

    /// Hold or release fast drop.
    ///
    /// Pressing performs one immediate fall step, then the fall timer restarts
    /// at the fast interval. Releasing restarts it at the base interval, or,
    /// while paused, keeps the pending delay (capped at the base interval).
    pub fn set_fast_drop(&mut self, on: bool) -> bool {
        if on == self.fast_drop {
            return false;
        }
        match self.state {
            SessionState::Running => {}
            // A release while paused must still clear the flag.
            SessionState::Paused if !on => {}
            _ => return false,
        }

        self.fast_drop = on;
        if on {
            self.fall_step();
            if self.state == SessionState::GameOver {
                return true;
            }
        }
        if self.state == SessionState::Paused {
            // Keep the frozen delay so resuming continues where it stopped.
            self.fall_timer.retime(self.drop_interval_ms());
        } else {
            self.fall_timer.set_interval(self.drop_interval_ms());
            self.fall_timer.restart();
        }
        true
    }

    /// Advance the session clock by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.state != SessionState::Running {
            return;
        }

        self.score.add_time(elapsed_ms);
        self.rotate_cooldown.advance(elapsed_ms);

        // One firing at a time: a level-up inside this step re-arms the timer.
        let mut budget = elapsed_ms;
        while self.state == SessionState::Running && self.fall_timer.fire_within(&mut budget) {
            self.fall_step();
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::FastDropOn => self.set_fast_drop(true),
            GameAction::FastDropOff => self.set_fast_drop(false),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Take all notifications raised since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move the piece down one row, or lock it when it is resting.
    fn fall_step(&mut self) {
        let Some(piece) = self.active.as_mut() else {
            return;
        };
        if piece.would_collide_vertically(&self.field) {
            self.lock_active();
        } else {
            piece.move_down();
        }
    }

    /// Lock, clear, score and respawn as one step.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.field.lock(&piece.into_blocks());
        self.score.record_piece();
        self.events.push(GameEvent::PieceLocked);

        if let Some(clear) = line_clear::resolve(&mut self.field, &mut self.score) {
            self.events.push(GameEvent::LinesCleared(clear.count()));
            if clear.level_up {
                self.level_up();
            }
        }

        self.spawn_next();
    }

    fn level_up(&mut self) {
        self.base_drop_ms = next_drop_interval_ms(
            self.base_drop_ms,
            self.config.level_speed_multiplier,
            self.config.min_drop_ms,
        );
        if !self.fast_drop {
            self.fall_timer.set_interval(self.base_drop_ms);
            self.fall_timer.restart();
        }
        self.events.push(GameEvent::LevelUp(self.score.level()));
    }

    /// Spawn the front of the queue, or end the game if it does not fit.
    fn spawn_next(&mut self) -> bool {
        let shape = self.queue.peek()[0];
        match Piece::spawn(shape, &self.field, self.next_block_id) {
            Some(piece) => {
                self.queue.pop_and_refill();
                self.next_block_id = self.next_block_id.wrapping_add(4);
                self.active = Some(piece);
                true
            }
            None => {
                self.game_over();
                false
            }
        }
    }

    fn game_over(&mut self) {
        self.state = SessionState::GameOver;
        self.active = None;
        self.fast_drop = false;
        self.fall_timer.stop();
        self.rotate_cooldown.stop();
        self.events.push(GameEvent::GameOver);
    }

    /// Final statistics, available once the game is over.
    pub fn final_stats(&self) -> Option<GameStats> {
        (self.state == SessionState::GameOver).then(|| GameStats::from(&self.score))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_shape_grid(&mut out.field);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.next = self.queue.peek();
        out.score = self.score.score();
        out.level = self.score.level();
        out.lines = self.score.lines();
        out.state = self.state;
        out.fast_drop = self.fast_drop;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[doc(hidden)]
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Replace the active piece with a freshly spawned `shape`.
    ///
    /// Returns `false` (active piece untouched) when the shape does not fit.
    #[doc(hidden)]
    pub fn spawn_shape(&mut self, shape: ShapeKind) -> bool {
        let Some(piece) = Piece::spawn(shape, &self.field, self.next_block_id) else {
            return false;
        };
        self.next_block_id = self.next_block_id.wrapping_add(4);
        self.active = Some(piece);
        true
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
