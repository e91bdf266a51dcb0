use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// Seconds ahead a manually created `Reminder` fires by default
pub const DEFAULT_REMINDER_DELAY_SECS: i64 = 180;

/// A `Reminder` tells a user that one of their `Transaction`s is
/// about to expire.
///
/// There is at most one `Reminder` per `transaction_id` and `remind_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The `Transaction` this `Reminder` is associated with
    pub transaction_id: ID,
    pub user_id: ID,
    pub title: String,
    /// The instant this `Reminder` fires at
    pub remind_at: DateTime<Utc>,
    /// Whether the user has acknowledged it
    pub status: bool,
    pub created: DateTime<Utc>,
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}
