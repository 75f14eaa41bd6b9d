/// A pressed key, already stripped of terminal specifics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    /// Any other key. Still counts as a key press on the intro screen.
    Other,
}

/// One discrete input event fed to the game once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The player asked to close the game window
    Close,
    KeyPress(Key),
}

impl From<Key> for InputEvent {
    fn from(key: Key) -> Self {
        InputEvent::KeyPress(key)
    }
}
