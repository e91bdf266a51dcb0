use chrono::{DateTime, Utc};
use fincv_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub transaction_id: ID,
    pub user_id: ID,
    pub title: String,
    pub remind_at: DateTime<Utc>,
    pub status: bool,
    pub created: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            transaction_id: reminder.transaction_id,
            user_id: reminder.user_id,
            title: reminder.title,
            remind_at: reminder.remind_at,
            status: reminder.status,
            created: reminder.created,
        }
    }
}
