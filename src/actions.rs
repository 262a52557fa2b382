//! Function-key actions.
//!
//! The workstation exposes ten actions, one per function key. Each action
//! also has a short code used by the on-screen button bar and by anything
//! that hands actions in as text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Help,
    Save,
    Load,
    Block,
    Goto,
    Search,
    Format,
    Options,
    Spell,
    Exit,
}

/// An action code or function key with no matching [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown function key action: {0}")]
pub struct UnknownAction(pub String);

impl Action {
    /// Every action in function-key order (F1 first).
    pub const ALL: [Self; 10] = [
        Self::Help,
        Self::Save,
        Self::Load,
        Self::Block,
        Self::Goto,
        Self::Search,
        Self::Format,
        Self::Options,
        Self::Spell,
        Self::Exit,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Save => "save",
            Self::Load => "load",
            Self::Block => "block",
            Self::Goto => "goto",
            Self::Search => "search",
            Self::Format => "format",
            Self::Options => "options",
            Self::Spell => "spell",
            Self::Exit => "exit",
        }
    }

    /// Upper-case name used on buttons and in notices.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Help => "HELP",
            Self::Save => "SAVE",
            Self::Load => "LOAD",
            Self::Block => "BLOCK",
            Self::Goto => "GOTO",
            Self::Search => "SEARCH",
            Self::Format => "FORMAT",
            Self::Options => "OPTIONS",
            Self::Spell => "SPELL",
            Self::Exit => "EXIT",
        }
    }

    /// Function key number, 1 through 10.
    pub const fn function_key(self) -> u8 {
        match self {
            Self::Help => 1,
            Self::Save => 2,
            Self::Load => 3,
            Self::Block => 4,
            Self::Goto => 5,
            Self::Search => 6,
            Self::Format => 7,
            Self::Options => 8,
            Self::Spell => 9,
            Self::Exit => 10,
        }
    }

    pub const fn from_function_key(key: u8) -> Option<Self> {
        match key {
            1 => Some(Self::Help),
            2 => Some(Self::Save),
            3 => Some(Self::Load),
            4 => Some(Self::Block),
            5 => Some(Self::Goto),
            6 => Some(Self::Search),
            7 => Some(Self::Format),
            8 => Some(Self::Options),
            9 => Some(Self::Spell),
            10 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Look up an action by its code.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAction`] when `code` names no action.
    pub fn from_code(code: &str) -> Result<Self, UnknownAction> {
        Self::ALL
            .into_iter()
            .find(|action| action.code() == code)
            .ok_or_else(|| UnknownAction(code.to_string()))
    }

    /// Whether the action does more than announce itself.
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::Help | Self::Save | Self::Load | Self::Exit)
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
