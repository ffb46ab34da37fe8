//! Per-card action dispatch.

use std::fmt;
use std::str::FromStr;

use super::UserRecord;
use super::ports::CardActions;

/// One of the actions offered on every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    /// Open the record.
    View,
    /// Bookmark the record.
    Bookmark,
    /// Promote the record.
    Promote,
}

impl CardAction {
    /// All actions in card order.
    pub const ALL: [Self; 3] = [Self::View, Self::Bookmark, Self::Promote];

    /// Button label shown on cards.
    pub const fn label(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Bookmark => "Bookmark",
            Self::Promote => "Promote",
        }
    }

    /// Route the action to its handler.
    pub fn invoke(self, handlers: &dyn CardActions, user: &UserRecord) {
        match self {
            Self::View => handlers.view(user),
            Self::Bookmark => handlers.bookmark(user),
            Self::Promote => handlers.promote(user),
        }
    }
}

impl fmt::Display for CardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when text names no card action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card action: {value}")]
pub struct UnknownCardAction {
    /// The rejected input.
    pub value: String,
}

impl FromStr for CardAction {
    type Err = UnknownCardAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCardAction {
                value: trimmed.to_owned(),
            })
    }
}
