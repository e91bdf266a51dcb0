use crate::{APIResponse, BaseClient, DueValue, ID};
use fincv_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct TransactionClient {
    base: Arc<BaseClient>,
}

pub struct CreateTransactionInput {
    pub user_id: ID,
    pub partner_id: ID,
    pub title: String,
    pub balance: i64,
    pub due: Option<DueValue>,
    pub closed: Option<bool>,
    pub recurring: Option<bool>,
}

#[derive(Default)]
pub struct UpdateTransactionInput {
    pub transaction_id: ID,
    pub partner_id: Option<ID>,
    pub title: Option<String>,
    pub balance: Option<i64>,
    pub due: Option<DueValue>,
    pub closed: Option<bool>,
    pub recurring: Option<bool>,
}

impl TransactionClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateTransactionInput,
    ) -> APIResponse<create_transaction::APIResponse> {
        let body = create_transaction::RequestBody {
            user_id: input.user_id,
            partner_id: input.partner_id,
            title: input.title,
            balance: input.balance,
            due: input.due,
            closed: input.closed,
            recurring: input.recurring,
        };
        self.base
            .post(body, "transactions".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_transactions::APIResponse> {
        self.base.get("transactions".into(), StatusCode::OK).await
    }

    pub async fn get_open(&self) -> APIResponse<get_transactions::APIResponse> {
        self.base
            .get("transactions?open=true".into(), StatusCode::OK)
            .await
    }

    pub async fn get_by_user(
        &self,
        user_id: ID,
    ) -> APIResponse<get_transactions_by_user::APIResponse> {
        self.base
            .get(format!("transactions/user/{}", user_id), StatusCode::OK)
            .await
    }

    pub async fn get(&self, transaction_id: ID) -> APIResponse<get_transaction::APIResponse> {
        self.base
            .get(format!("transactions/{}", transaction_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateTransactionInput,
    ) -> APIResponse<update_transaction::APIResponse> {
        let body = update_transaction::RequestBody {
            partner_id: input.partner_id,
            title: input.title,
            balance: input.balance,
            due: input.due,
            closed: input.closed,
            recurring: input.recurring,
        };
        self.base
            .patch(
                body,
                format!("transactions/{}", input.transaction_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, transaction_id: ID) -> APIResponse<delete_transaction::APIResponse> {
        self.base
            .delete(format!("transactions/{}", transaction_id), StatusCode::OK)
            .await
    }

    /// Moves the due of a recurring transaction a few minutes ahead of now
    pub async fn refresh_recurring(
        &self,
        transaction_id: ID,
    ) -> APIResponse<refresh_recurring_transaction::APIResponse> {
        self.base
            .patch(
                (),
                format!("transactions/{}/recurring", transaction_id),
                StatusCode::OK,
            )
            .await
    }
}
