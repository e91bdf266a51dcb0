mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

use chrono::{DateTime, Utc};
use fincv_domain::{Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Inserts the `Reminder` unless one for the same transaction and
    /// `remind_at` already exists. Returns whether it was inserted.
    async fn insert_if_absent(&self, reminder: &Reminder) -> anyhow::Result<bool>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_by_transaction_and_remind_at(
        &self,
        transaction_id: &ID,
        remind_at: DateTime<Utc>,
    ) -> Option<Reminder>;
    /// Ordered by `remind_at`
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    async fn find_by_transaction(&self, transaction_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    async fn find_by_user_and_status(
        &self,
        user_id: &ID,
        status: bool,
    ) -> anyhow::Result<Vec<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, FincvContext};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use fincv_domain::{Reminder, ID};

    async fn create_contexts() -> Vec<FincvContext> {
        vec![
            FincvContext::create_inmemory(),
            setup_context().await.unwrap(),
        ]
    }

    fn remind_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()
    }

    fn reminder(transaction_id: ID, user_id: ID, remind_at: DateTime<Utc>) -> Reminder {
        Reminder {
            id: Default::default(),
            transaction_id,
            user_id,
            title: "240초 전 만기: 관리비".into(),
            remind_at,
            status: false,
            created: remind_at,
        }
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn insert_if_absent_is_idempotent() {
        for ctx in create_contexts().await {
            let transaction_id = ID::default();
            let first = reminder(transaction_id, ID::default(), remind_at());
            let duplicate = reminder(transaction_id, first.user_id, remind_at());

            assert!(ctx.repos.reminders.insert_if_absent(&first).await.unwrap());
            assert!(!ctx
                .repos
                .reminders
                .insert_if_absent(&duplicate)
                .await
                .unwrap());

            let stored = ctx
                .repos
                .reminders
                .find_by_transaction(&transaction_id)
                .await
                .unwrap();
            assert_eq!(stored.len(), 1);
            assert_eq!(stored[0].id, first.id);

            let found = ctx
                .repos
                .reminders
                .find_by_transaction_and_remind_at(&transaction_id, remind_at())
                .await
                .unwrap();
            assert_eq!(found.id, first.id);

            // Another trigger of the same transaction is a different reminder
            let next = reminder(
                transaction_id,
                first.user_id,
                remind_at() + Duration::seconds(60),
            );
            assert!(ctx.repos.reminders.insert_if_absent(&next).await.unwrap());
        }
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn update_and_filter_by_status() {
        for ctx in create_contexts().await {
            let user_id = ID::default();
            let mut done = reminder(ID::default(), user_id, remind_at());
            let pending = reminder(ID::default(), user_id, remind_at() - Duration::seconds(30));
            ctx.repos.reminders.insert_if_absent(&done).await.unwrap();
            ctx.repos.reminders.insert_if_absent(&pending).await.unwrap();

            done.status = true;
            assert!(ctx.repos.reminders.save(&done).await.is_ok());

            let res = ctx
                .repos
                .reminders
                .find_by_user_and_status(&user_id, true)
                .await
                .unwrap();
            assert_eq!(res.len(), 1);
            assert_eq!(res[0].id, done.id);

            let res = ctx.repos.reminders.find_by_user(&user_id).await.unwrap();
            assert_eq!(res.len(), 2);
            // Ordered by remind_at
            assert_eq!(res[0].id, pending.id);

            let res = ctx.repos.reminders.delete(&done.id).await.unwrap();
            assert_eq!(res.id, done.id);
            assert!(ctx.repos.reminders.find(&done.id).await.is_none());
        }
    }
}
