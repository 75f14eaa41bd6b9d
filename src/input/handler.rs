use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::event::{InputEvent, Key};

/// Translates terminal events into game input events
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` for events the game does not care about (releases,
    /// resizes, mouse, focus).
    pub fn translate(&self, event: &Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Some(self.handle_key_event(*key))
            }
            _ => None,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputEvent {
        // Ctrl+C and Esc close the game like the window's close button
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputEvent::Close;
        }

        let key = match key.code {
            KeyCode::Esc => return InputEvent::Close,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        };

        InputEvent::KeyPress(key)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
