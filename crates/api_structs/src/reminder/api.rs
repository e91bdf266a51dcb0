use crate::dtos::ReminderDTO;
use chrono::{DateTime, Utc};
use fincv_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemindersResponse {
    pub reminders: Vec<ReminderDTO>,
}

impl RemindersResponse {
    pub fn new(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct ReminderPathParams {
    pub reminder_id: ID,
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub transaction_id: ID,
        pub user_id: ID,
        pub title: String,
        /// Defaults to three minutes from now
        #[serde(default)]
        pub remind_at: Option<DateTime<Utc>>,
        #[serde(default)]
        pub status: Option<bool>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminders_by_transaction {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub transaction_id: ID,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminders_by_user {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminders_by_user_and_status {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub is_done: bool,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminder {
    use super::*;

    pub type PathParams = ReminderPathParams;
    pub type APIResponse = ReminderResponse;
}

pub mod update_reminder {
    use super::*;

    pub type PathParams = ReminderPathParams;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: Option<String>,
        pub remind_at: Option<DateTime<Utc>>,
        pub status: Option<bool>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    pub type PathParams = ReminderPathParams;
    pub type APIResponse = ReminderResponse;
}
