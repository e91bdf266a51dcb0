use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use fincv_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

fn by_remind_at(mut reminders: Vec<Reminder>) -> Vec<Reminder> {
    reminders.sort_by_key(|r| r.remind_at);
    reminders
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert_if_absent(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        let mut reminders = lock(&self.reminders);
        let exists = reminders.iter().any(|r| {
            r.transaction_id == reminder.transaction_id && r.remind_at == reminder.remind_at
        });
        if exists {
            return Ok(false);
        }
        reminders.push(reminder.clone());
        Ok(true)
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        save(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_transaction_and_remind_at(
        &self,
        transaction_id: &ID,
        remind_at: DateTime<Utc>,
    ) -> Option<Reminder> {
        find_by(&self.reminders, |r| {
            r.transaction_id == *transaction_id && r.remind_at == remind_at
        })
        .into_iter()
        .next()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(by_remind_at(find_by(&self.reminders, |_| true)))
    }

    async fn find_by_transaction(&self, transaction_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        Ok(by_remind_at(find_by(&self.reminders, |r| {
            r.transaction_id == *transaction_id
        })))
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        Ok(by_remind_at(find_by(&self.reminders, |r| {
            r.user_id == *user_id
        })))
    }

    async fn find_by_user_and_status(
        &self,
        user_id: &ID,
        status: bool,
    ) -> anyhow::Result<Vec<Reminder>> {
        Ok(by_remind_at(find_by(&self.reminders, |r| {
            r.user_id == *user_id && r.status == status
        })))
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }
}
