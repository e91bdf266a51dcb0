use super::IReminderRepo;
use chrono::{DateTime, Utc};
use fincv_domain::{Reminder, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    transaction_uid: Uuid,
    user_uid: Uuid,
    title: String,
    remind_at: DateTime<Utc>,
    status: bool,
    created: DateTime<Utc>,
}

impl From<ReminderRaw> for Reminder {
    fn from(e: ReminderRaw) -> Self {
        Self {
            id: e.reminder_uid.into(),
            transaction_id: e.transaction_uid.into(),
            user_id: e.user_uid.into(),
            title: e.title,
            remind_at: e.remind_at,
            status: e.status,
            created: e.created,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert_if_absent(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, transaction_uid, user_uid, title, remind_at, status, created)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (transaction_uid, remind_at) DO NOTHING
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.transaction_id.inner_ref())
        .bind(reminder.user_id.inner_ref())
        .bind(&reminder.title)
        .bind(reminder.remind_at)
        .bind(reminder.status)
        .bind(reminder.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;
        Ok(res.rows_affected() == 1)
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET title = $2,
            remind_at = $3,
            status = $4
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.title)
        .bind(reminder.remind_at)
        .bind(reminder.status)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder with id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })
        .ok()?;
        res.map(|r| r.into())
    }

    async fn find_by_transaction_and_remind_at(
        &self,
        transaction_id: &ID,
        remind_at: DateTime<Utc>,
    ) -> Option<Reminder> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE transaction_uid = $1 AND remind_at = $2
            "#,
        )
        .bind(transaction_id.inner_ref())
        .bind(remind_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder for transaction: {:?} at {} failed. DB returned error: {:?}",
                transaction_id, remind_at, e
            );
            e
        })
        .ok()?;
        res.map(|r| r.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            ORDER BY remind_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all reminders failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_transaction(&self, transaction_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE transaction_uid = $1
            ORDER BY remind_at
            "#,
        )
        .bind(transaction_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminders for transaction: {:?} failed. DB returned error: {:?}",
                transaction_id, e
            );
            e
        })?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE user_uid = $1
            ORDER BY remind_at
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminders for user: {:?} failed. DB returned error: {:?}",
                user_id, e
            );
            e
        })?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_user_and_status(
        &self,
        user_id: &ID,
        status: bool,
    ) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE user_uid = $1 AND status = $2
            ORDER BY remind_at
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminders for user: {:?} with status: {} failed. DB returned error: {:?}",
                user_id, status, e
            );
            e
        })?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            DELETE FROM reminders
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete reminder with id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })
        .ok()?;
        res.map(|r| r.into())
    }
}
