//! UI-agnostic input actions and the key mapping for them.

use crossterm::event::KeyCode;

/// Input actions understood by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Movement intent on one axis, -1/0/+1 per component.
    Move(i8, i8),
    /// Space: start from title/game-over, skip the wave-clear pause.
    Start,
    /// F1: toggle the hitbox overlay.
    ToggleDebug,
    /// R: back to wave 1.
    Reset,
    /// Esc: leave the game.
    Quit,
    /// Any other key.
    Other,
}

/// Map a key press to a game input. Arrows and WASD both move.
pub fn map_key(code: KeyCode) -> GameInput {
    match code {
        KeyCode::Esc => GameInput::Quit,
        KeyCode::F(1) => GameInput::ToggleDebug,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Reset,
        KeyCode::Char(' ') => GameInput::Start,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => GameInput::Move(0, -1),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => GameInput::Move(0, 1),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => GameInput::Move(-1, 0),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => GameInput::Move(1, 0),
        _ => GameInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_agree() {
        assert_eq!(map_key(KeyCode::Up), map_key(KeyCode::Char('w')));
        assert_eq!(map_key(KeyCode::Down), map_key(KeyCode::Char('s')));
        assert_eq!(map_key(KeyCode::Left), map_key(KeyCode::Char('a')));
        assert_eq!(map_key(KeyCode::Right), map_key(KeyCode::Char('d')));
    }

    #[test]
    fn test_wasd_case_insensitive() {
        assert_eq!(map_key(KeyCode::Char('W')), GameInput::Move(0, -1));
        assert_eq!(map_key(KeyCode::Char('A')), GameInput::Move(-1, 0));
        assert_eq!(map_key(KeyCode::Char('S')), GameInput::Move(0, 1));
        assert_eq!(map_key(KeyCode::Char('D')), GameInput::Move(1, 0));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(KeyCode::Esc), GameInput::Quit);
        assert_eq!(map_key(KeyCode::F(1)), GameInput::ToggleDebug);
        assert_eq!(map_key(KeyCode::Char('r')), GameInput::Reset);
        assert_eq!(map_key(KeyCode::Char('R')), GameInput::Reset);
        assert_eq!(map_key(KeyCode::Char(' ')), GameInput::Start);
    }

    #[test]
    fn test_unmapped_keys_are_other() {
        assert_eq!(map_key(KeyCode::Char('z')), GameInput::Other);
        assert_eq!(map_key(KeyCode::Enter), GameInput::Other);
        assert_eq!(map_key(KeyCode::F(2)), GameInput::Other);
    }
}
