//! Logical actions, physical keys and the per-player binding table between them.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::player::StartSide;

/// Logical action a player can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Enter,
    ToggleHide,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Enter,
        Action::ToggleHide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Up => "UP",
            Action::Down => "DOWN",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
            Action::Enter => "ENTER",
            Action::ToggleHide => "TOGGLE_HIDE",
        }
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| InputError::UnknownAction(s.to_string()))
    }
}

/// A physical key as delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Tab,
    Backspace,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::ArrowUp => f.write_str("up"),
            Key::ArrowDown => f.write_str("down"),
            Key::ArrowLeft => f.write_str("left"),
            Key::ArrowRight => f.write_str("right"),
            Key::Enter => f.write_str("enter"),
            Key::Space => f.write_str("space"),
            Key::Tab => f.write_str("tab"),
            Key::Backspace => f.write_str("backspace"),
        }
    }
}

impl FromStr for Key {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return match c {
                ' ' => Ok(Key::Space),
                '\t' => Ok(Key::Tab),
                '\n' | '\r' => Ok(Key::Enter),
                c if c.is_ascii_graphic() => Ok(Key::Char(c.to_ascii_lowercase())),
                _ => Err(InputError::UnknownKey(s.to_string())),
            };
        }
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "up" => Ok(Key::ArrowUp),
            "down" => Ok(Key::ArrowDown),
            "left" => Ok(Key::ArrowLeft),
            "right" => Ok(Key::ArrowRight),
            "enter" | "return" => Ok(Key::Enter),
            "space" => Ok(Key::Space),
            "tab" => Ok(Key::Tab),
            "backspace" => Ok(Key::Backspace),
            _ => Err(InputError::UnknownKey(s.to_string())),
        }
    }
}

/// Errors parsing keys or action names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    UnknownKey(String),
    UnknownAction(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnknownKey(k) => write!(f, "Unknown key '{}'", k),
            InputError::UnknownAction(a) => write!(f, "Unknown action '{}'", a),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// One physical key per logical action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    keys: [Key; 6],
}

impl KeyBindings {
    /// Build a table from keys listed in `Action::ALL` order.
    pub const fn new(up: Key, down: Key, left: Key, right: Key, enter: Key, toggle_hide: Key) -> Self {
        Self {
            keys: [up, down, left, right, enter, toggle_hide],
        }
    }

    pub fn key_for(&self, action: Action) -> Key {
        self.keys[action.slot()]
    }

    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: Key) -> Option<Action> {
        Action::ALL.iter().copied().find(|a| self.keys[a.slot()] == key)
    }

    pub fn keys_used(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys.iter().copied()
    }

    pub fn rebind(&mut self, action: Action, key: Key) {
        self.keys[action.slot()] = key;
    }
}

/// The two human seats, each with its own key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    PlayerOne,
    PlayerTwo,
}

impl PlayerKind {
    pub fn bindings(&self) -> KeyBindings {
        match self {
            PlayerKind::PlayerOne => KeyBindings::new(
                Key::Char('w'),
                Key::Char('s'),
                Key::Char('a'),
                Key::Char('d'),
                Key::Space,
                Key::Char('q'),
            ),
            PlayerKind::PlayerTwo => KeyBindings::new(
                Key::ArrowUp,
                Key::ArrowDown,
                Key::ArrowLeft,
                Key::ArrowRight,
                Key::Enter,
                Key::Backspace,
            ),
        }
    }

    pub fn default_side(&self) -> StartSide {
        match self {
            PlayerKind::PlayerOne => StartSide::TopLeft,
            PlayerKind::PlayerTwo => StartSide::BottomRight,
        }
    }

    pub fn other(&self) -> PlayerKind {
        match self {
            PlayerKind::PlayerOne => PlayerKind::PlayerTwo,
            PlayerKind::PlayerTwo => PlayerKind::PlayerOne,
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::PlayerOne => f.write_str("Player 1"),
            PlayerKind::PlayerTwo => f.write_str("Player 2"),
        }
    }
}
