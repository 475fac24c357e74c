//! Input handling: maps terminal events to player actions.
//!
//! Keeps the crossterm types out of the game logic so the simulation can be
//! driven from tests without a terminal.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::game::PlayerInput;

/// Map a key press to a player action.
pub fn map_key(key: KeyEvent) -> PlayerInput {
    // Kitty-protocol and Windows terminals report releases and repeats too;
    // only the press itself acts.
    if key.kind != KeyEventKind::Press {
        return PlayerInput::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return PlayerInput::Quit;
    }
    match key.code {
        KeyCode::Char(' ') => PlayerInput::Primary,
        KeyCode::Enter => PlayerInput::Confirm,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => PlayerInput::Quit,
        _ => PlayerInput::Other,
    }
}

/// Map a mouse event to a player action. Only left clicks are bound.
pub fn map_mouse(mouse: MouseEvent) -> PlayerInput {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PlayerInput::Primary,
        _ => PlayerInput::Other,
    }
}
