//! Held-key handling for terminal environments.
//!
//! Horizontal keys move once on press and then repeat at a fixed delay while
//! held. The fast-drop key is turned into a press/release pair. Terminals that
//! never report key releases are handled with a timeout.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent};

use crate::core::Timer;
use crate::map::handle_key_event;
use crate::types::{GameAction, MOVE_REPEAT_MS};

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

impl HorizontalDirection {
    fn action(self) -> Option<GameAction> {
        match self {
            HorizontalDirection::Left => Some(GameAction::MoveLeft),
            HorizontalDirection::Right => Some(GameAction::MoveRight),
            HorizontalDirection::None => None,
        }
    }
}

/// Tracks held keys and produces repeat/release actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    fast_drop_held: bool,
    repeat: Timer,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

// A tap must not stick as "held" when the terminal sends no release event.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl InputHandler {
    pub fn new() -> Self {
        Self::with_repeat_ms(MOVE_REPEAT_MS)
    }

    pub fn with_repeat_ms(repeat_ms: u32) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            fast_drop_held: false,
            repeat: Timer::repeating(repeat_ms),
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn horizontal(&self) -> HorizontalDirection {
        self.horizontal
    }

    pub fn fast_drop_held(&self) -> bool {
        self.fast_drop_held
    }

    /// Handle a key press. Returns the action to apply now, if any.
    ///
    /// Presses of an already-held key (terminal auto-repeat) only refresh the
    /// release timeout.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = handle_key_event(KeyEvent::from(code))?;
        match action {
            GameAction::MoveLeft | GameAction::MoveRight => {
                self.last_key_time = Instant::now();
                let direction = if action == GameAction::MoveLeft {
                    HorizontalDirection::Left
                } else {
                    HorizontalDirection::Right
                };
                if self.horizontal == direction {
                    return None;
                }
                self.horizontal = direction;
                let paused = self.repeat.is_paused();
                self.repeat.start();
                if paused {
                    self.repeat.pause();
                }
                Some(action)
            }
            GameAction::FastDropOn => {
                self.last_key_time = Instant::now();
                if self.fast_drop_held {
                    return None;
                }
                self.fast_drop_held = true;
                Some(action)
            }
            _ => None,
        }
    }

    /// Handle a key release. Returns `FastDropOff` when fast drop ends.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameAction> {
        match handle_key_event(KeyEvent::from(code))? {
            GameAction::MoveLeft if self.horizontal == HorizontalDirection::Left => {
                self.release_horizontal();
                None
            }
            GameAction::MoveRight if self.horizontal == HorizontalDirection::Right => {
                self.release_horizontal();
                None
            }
            GameAction::FastDropOn => self.release_fast_drop(),
            _ => None,
        }
    }

    /// Advance held-key timers by `elapsed_ms`.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 16> {
        let mut actions = ArrayVec::<GameAction, 16>::new();

        // Auto-release when terminal does not emit release events.
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            self.release_horizontal();
            if let Some(action) = self.release_fast_drop() {
                let _ = actions.try_push(action);
            }
        }

        if let Some(action) = self.horizontal.action() {
            let fires = self.repeat.advance(elapsed_ms);
            for _ in 0..fires {
                if actions.try_push(action).is_err() {
                    break;
                }
            }
        }

        actions
    }

    /// Freeze or resume the auto-repeat timer along with the game.
    pub fn set_paused(&mut self, paused: bool) {
        if paused {
            self.repeat.pause();
        } else {
            self.repeat.resume();
        }
    }

    pub fn reset(&mut self) {
        self.release_horizontal();
        self.fast_drop_held = false;
        self.repeat.resume();
        self.last_key_time = Instant::now();
    }

    fn release_horizontal(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.repeat.stop();
    }

    fn release_fast_drop(&mut self) -> Option<GameAction> {
        if !self.fast_drop_held {
            return None;
        }
        self.fast_drop_held = false;
        Some(GameAction::FastDropOff)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
