use crate::{APIResponse, BaseClient, ID};
use chrono::{DateTime, Utc};
use fincv_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub transaction_id: ID,
    pub user_id: ID,
    pub title: String,
    pub remind_at: Option<DateTime<Utc>>,
    pub status: Option<bool>,
}

#[derive(Default)]
pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub title: Option<String>,
    pub remind_at: Option<DateTime<Utc>>,
    pub status: Option<bool>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateReminderInput) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            transaction_id: input.transaction_id,
            user_id: input.user_id,
            title: input.title,
            remind_at: input.remind_at,
            status: input.status,
        };
        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn get_by_transaction(
        &self,
        transaction_id: ID,
    ) -> APIResponse<get_reminders_by_transaction::APIResponse> {
        self.base
            .get(
                format!("reminders/transaction/{}", transaction_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_by_user(&self, user_id: ID) -> APIResponse<get_reminders_by_user::APIResponse> {
        self.base
            .get(format!("reminders/user/{}", user_id), StatusCode::OK)
            .await
    }

    pub async fn get_by_user_and_status(
        &self,
        user_id: ID,
        is_done: bool,
    ) -> APIResponse<get_reminders_by_user_and_status::APIResponse> {
        self.base
            .get(
                format!("reminders/user/{}/status?isDone={}", user_id, is_done),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateReminderInput) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            title: input.title,
            remind_at: input.remind_at,
            status: input.status,
        };
        self.base
            .patch(
                body,
                format!("reminders/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }
}
