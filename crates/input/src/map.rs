//! Key mapping from terminal events to paddle directions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Direction for horizontal paddle movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
}

/// Map keyboard input to a movement direction.
pub fn movement_direction(code: KeyCode) -> Option<HorizontalDirection> {
    match code {
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(HorizontalDirection::Left),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(HorizontalDirection::Right),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key restarts the session after a terminal condition.
pub fn is_restart(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            movement_direction(KeyCode::Left),
            Some(HorizontalDirection::Left)
        );
        assert_eq!(
            movement_direction(KeyCode::Right),
            Some(HorizontalDirection::Right)
        );
        assert_eq!(
            movement_direction(KeyCode::Char('a')),
            Some(HorizontalDirection::Left)
        );
        assert_eq!(
            movement_direction(KeyCode::Char('D')),
            Some(HorizontalDirection::Right)
        );
        assert_eq!(
            movement_direction(KeyCode::Char('h')),
            Some(HorizontalDirection::Left)
        );
        assert_eq!(movement_direction(KeyCode::Up), None);
        assert_eq!(movement_direction(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_restart_keys() {
        assert!(is_restart(KeyCode::Char('r')));
        assert!(is_restart(KeyCode::Enter));
        assert!(!is_restart(KeyCode::Char('q')));
    }
}
