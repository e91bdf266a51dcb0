use crate::{APIResponse, BaseClient, ID};
use fincv_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AccountClient {
    base: Arc<BaseClient>,
}

pub struct CreateAccountInput {
    pub user_id: ID,
    pub number: String,
    pub bank: String,
    pub balance: Option<i64>,
}

pub struct UpdateAccountInput {
    pub account_id: ID,
    pub number: Option<String>,
    pub bank: Option<String>,
    pub balance: Option<i64>,
}

pub struct TransferInput {
    pub from_account_number: String,
    pub withdraw_amount: i64,
    pub to_account_number: String,
    pub deposit_amount: i64,
}

impl AccountClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateAccountInput) -> APIResponse<create_account::APIResponse> {
        let body = create_account::RequestBody {
            user_id: input.user_id,
            number: input.number,
            bank: input.bank,
            balance: input.balance,
        };
        self.base
            .post(body, "accounts".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_accounts::APIResponse> {
        self.base.get("accounts".into(), StatusCode::OK).await
    }

    pub async fn get_by_user(&self, user_id: ID) -> APIResponse<get_accounts_by_user::APIResponse> {
        self.base
            .get(format!("accounts/user/{}", user_id), StatusCode::OK)
            .await
    }

    pub async fn get(&self, account_id: ID) -> APIResponse<get_account::APIResponse> {
        self.base
            .get(format!("accounts/{}", account_id), StatusCode::OK)
            .await
    }

    pub async fn get_by_number(&self, number: &str) -> APIResponse<get_account_by_number::APIResponse> {
        self.base
            .get(format!("accounts/number/{}", number), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateAccountInput) -> APIResponse<update_account::APIResponse> {
        let body = update_account::RequestBody {
            number: input.number,
            bank: input.bank,
            balance: input.balance,
        };
        self.base
            .put(body, format!("accounts/{}", input.account_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, account_id: ID) -> APIResponse<delete_account::APIResponse> {
        self.base
            .delete(format!("accounts/{}", account_id), StatusCode::OK)
            .await
    }

    pub async fn transfer(&self, input: TransferInput) -> APIResponse<transfer::APIResponse> {
        let body = transfer::RequestBody {
            from_account_number: input.from_account_number,
            withdraw_amount: input.withdraw_amount,
            to_account_number: input.to_account_number,
            deposit_amount: input.deposit_amount,
        };
        self.base
            .post(body, "accounts/transfer".into(), StatusCode::OK)
            .await
    }
}
