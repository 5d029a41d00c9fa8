//! Turn labels for the flat-line history format.

use std::fmt;

/// One conversation turn, rendered as a labeled line.
///
/// The store persists plain strings; this type only owns the label format
/// so `"User: "` / `"AI: "` prefixes stay consistent everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationTurn {
    User(String),
    Ai(String),
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::User(text.into())
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::Ai(text.into())
    }
}

impl fmt::Display for ConversationTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(text) => write!(f, "User: {text}"),
            Self::Ai(text) => write!(f, "AI: {text}"),
        }
    }
}
