//! Driven port for the per-card actions.
//!
//! Cards offer view, bookmark and promote. None of them has behaviour in the
//! dashboard itself; the port lets an embedding application supply handlers.

use tracing::debug;

use crate::domain::UserRecord;

/// Capability interface invoked when a card action is chosen.
#[cfg_attr(test, mockall::automock)]
pub trait CardActions: Send + Sync {
    /// Open the record for viewing.
    fn view(&self, user: &UserRecord);
    /// Bookmark the record.
    fn bookmark(&self, user: &UserRecord);
    /// Promote the record.
    fn promote(&self, user: &UserRecord);
}

/// Handlers that accept every action and do nothing beyond a debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct InertCardActions;

impl CardActions for InertCardActions {
    fn view(&self, user: &UserRecord) {
        debug!(user_id = user.id(), action = "view", "card action has no handler");
    }

    fn bookmark(&self, user: &UserRecord) {
        debug!(user_id = user.id(), action = "bookmark", "card action has no handler");
    }

    fn promote(&self, user: &UserRecord) {
        debug!(user_id = user.id(), action = "promote", "card action has no handler");
    }
}
