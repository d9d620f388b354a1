use serde::{Deserialize, Serialize};
use std::fmt;

/// Every user-initiated change to the deck goes through one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Next,
    Prev,
    /// Direct jump (indicator dot, contents card, presenter jump button).
    GoTo(usize),
    TogglePresenter,
    ToggleTimer,
    ResetTimer,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Next => write!(f, "next"),
            Command::Prev => write!(f, "prev"),
            Command::GoTo(index) => write!(f, "go to #{}", index),
            Command::TogglePresenter => write!(f, "toggle presenter"),
            Command::ToggleTimer => write!(f, "toggle timer"),
            Command::ResetTimer => write!(f, "reset timer"),
        }
    }
}
