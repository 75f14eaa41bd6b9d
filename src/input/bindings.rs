use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::event::Key;
use crate::game::Direction;

/// What a bound key asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Pause,
    Continue,
    Quit,
    Restart,
}

/// Keys for the mode commands. Arrow keys always steer; WASD steers too
/// when `wasd` is set. Letters match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub pause: char,
    #[serde(rename = "continue")]
    pub resume: char,
    pub quit: char,
    pub restart: char,
    pub wasd: bool,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pause: 'p',
            resume: 'c',
            quit: 'q',
            restart: 'r',
            wasd: true,
        }
    }
}

impl KeyBindings {
    /// Map a key to the command it is bound to, if any
    pub fn command_for(&self, key: Key) -> Option<Command> {
        match key {
            Key::Up => Some(Command::Move(Direction::Up)),
            Key::Down => Some(Command::Move(Direction::Down)),
            Key::Left => Some(Command::Move(Direction::Left)),
            Key::Right => Some(Command::Move(Direction::Right)),
            Key::Char(c) => self.command_for_char(c.to_ascii_lowercase()),
            Key::Other => None,
        }
    }

    fn command_for_char(&self, c: char) -> Option<Command> {
        if c == self.pause.to_ascii_lowercase() {
            return Some(Command::Pause);
        }
        if c == self.resume.to_ascii_lowercase() {
            return Some(Command::Continue);
        }
        if c == self.quit.to_ascii_lowercase() {
            return Some(Command::Quit);
        }
        if c == self.restart.to_ascii_lowercase() {
            return Some(Command::Restart);
        }

        if !self.wasd {
            return None;
        }
        match c {
            'w' => Some(Command::Move(Direction::Up)),
            's' => Some(Command::Move(Direction::Down)),
            'a' => Some(Command::Move(Direction::Left)),
            'd' => Some(Command::Move(Direction::Right)),
            _ => None,
        }
    }

    /// Reject bindings where one letter would mean two things
    pub fn validate(&self) -> Result<()> {
        let mut taken: Vec<(char, &str)> = Vec::new();
        if self.wasd {
            taken.extend([('w', "up"), ('a', "left"), ('s', "down"), ('d', "right")]);
        }

        let commands = [
            (self.pause, "pause"),
            (self.resume, "continue"),
            (self.quit, "quit"),
            (self.restart, "restart"),
        ];
        for (key, name) in commands {
            let key = key.to_ascii_lowercase();
            if key.is_control() || key.is_whitespace() {
                bail!("key for {name} must be a printable character");
            }
            if let Some((_, other)) = taken.iter().find(|(k, _)| *k == key) {
                bail!("key '{key}' is bound to both {other} and {name}");
            }
            taken.push((key, name));
        }

        Ok(())
    }
}
