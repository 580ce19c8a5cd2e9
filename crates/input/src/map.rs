//! Key mapping from terminal events to game actions.

use crate::core::SessionState;
use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game action.
///
/// Fast drop maps to its press half; the release half comes from
/// [`InputHandler`](crate::InputHandler).
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::FastDropOn),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Rotate),

        // Lifecycle
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Map a key press to the action it means in the given session state.
///
/// Enter and Space start a game, or restart one after game over. While a game
/// is running or paused, Space toggles pause.
pub fn key_action(key: KeyEvent, state: SessionState) -> Option<GameAction> {
    let action = handle_key_event(key)?;
    Some(match (action, state) {
        (GameAction::Start, SessionState::GameOver) => GameAction::Restart,
        (GameAction::Start, SessionState::Running | SessionState::Paused)
            if key.code == KeyCode::Char(' ') =>
        {
            GameAction::Pause
        }
        (other, _) => other,
    })
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn map(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(map(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(map(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(map(KeyCode::Char('a')), Some(GameAction::MoveLeft));
        assert_eq!(map(KeyCode::Char('D')), Some(GameAction::MoveRight));
        assert_eq!(map(KeyCode::Char('h')), Some(GameAction::MoveLeft));
        assert_eq!(map(KeyCode::Char('L')), Some(GameAction::MoveRight));
    }

    #[test]
    fn test_fast_drop_keys() {
        assert_eq!(map(KeyCode::Down), Some(GameAction::FastDropOn));
        assert_eq!(map(KeyCode::Char('s')), Some(GameAction::FastDropOn));
        assert_eq!(map(KeyCode::Char('J')), Some(GameAction::FastDropOn));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(map(KeyCode::Char('w')), Some(GameAction::Rotate));
        assert_eq!(map(KeyCode::Char('K')), Some(GameAction::Rotate));
    }

    #[test]
    fn test_lifecycle_keys() {
        assert_eq!(map(KeyCode::Enter), Some(GameAction::Start));
        assert_eq!(map(KeyCode::Char(' ')), Some(GameAction::Start));
        assert_eq!(map(KeyCode::Char('p')), Some(GameAction::Pause));
        assert_eq!(map(KeyCode::Char('R')), Some(GameAction::Restart));
        assert_eq!(map(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_space_pauses_during_play() {
        let space = KeyEvent::from(KeyCode::Char(' '));
        let enter = KeyEvent::from(KeyCode::Enter);

        assert_eq!(key_action(space, SessionState::NotStarted), Some(GameAction::Start));
        assert_eq!(key_action(space, SessionState::Running), Some(GameAction::Pause));
        assert_eq!(key_action(space, SessionState::Paused), Some(GameAction::Pause));
        assert_eq!(key_action(space, SessionState::GameOver), Some(GameAction::Restart));

        assert_eq!(key_action(enter, SessionState::Running), Some(GameAction::Start));
        assert_eq!(key_action(enter, SessionState::GameOver), Some(GameAction::Restart));
        assert_eq!(
            key_action(KeyEvent::from(KeyCode::Char('p')), SessionState::Running),
            Some(GameAction::Pause)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
