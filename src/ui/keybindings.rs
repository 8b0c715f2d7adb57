// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map digit/shifted-digit keys to panel number (1..3).
pub fn map_key_to_digit(k: &KeyEvent) -> Option<usize> {
    if let KeyCode::Char(c) = k.code {
        match c {
            '1' | '!' => Some(1),
            '2' | '@' => Some(2),
            '3' | '#' => Some(3),
            _ => None,
        }
    } else {
        None
    }
}

/// Check if the key event is a shifted symbol (!, @, #).
fn is_shifted_symbol(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('!') | KeyCode::Char('@') | KeyCode::Char('#')
    )
}

/// Actions the gallery understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    Left,
    Right,
    Activate,
    ClearSelections,
    ExportNames,
    Rescan,
    AddColumn,
    RemoveColumn,
    TogglePanel(usize),
    Quit,
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    // Check for panel toggle first
    if let Some(d) = map_key_to_digit(key) {
        if key.modifiers.contains(KeyModifiers::SHIFT) || is_shifted_symbol(key) {
            return NavigationAction::TogglePanel(d);
        }
    }

    match key.code {
        KeyCode::Down => NavigationAction::Down,
        KeyCode::Up => NavigationAction::Up,
        KeyCode::Left => NavigationAction::Left,
        KeyCode::Right => NavigationAction::Right,
        KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Activate,
        KeyCode::Char('c') => NavigationAction::ClearSelections,
        KeyCode::Char('e') => NavigationAction::ExportNames,
        KeyCode::Char('r') => NavigationAction::Rescan,
        KeyCode::Char('+') | KeyCode::Char('=') => NavigationAction::AddColumn,
        KeyCode::Char('-') => NavigationAction::RemoveColumn,
        KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_keys() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(key_to_action(&enter), NavigationAction::Activate);
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key_to_action(&space), NavigationAction::Activate);
    }

    #[test]
    fn shifted_digits_toggle_panels() {
        let bang = KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE);
        assert_eq!(key_to_action(&bang), NavigationAction::TogglePanel(1));
        let two = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::SHIFT);
        assert_eq!(key_to_action(&two), NavigationAction::TogglePanel(2));
    }

    #[test]
    fn unshifted_digits_do_nothing() {
        let one = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(key_to_action(&one), NavigationAction::None);
    }
}
