use crate::dtos::AccountDTO;
use fincv_domain::{Account, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account: AccountDTO,
}

impl AccountResponse {
    pub fn new(account: Account) -> Self {
        Self {
            account: AccountDTO::new(account),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsResponse {
    pub accounts: Vec<AccountDTO>,
}

impl AccountsResponse {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: accounts.into_iter().map(AccountDTO::new).collect(),
        }
    }
}

pub mod create_account {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: ID,
        pub number: String,
        pub bank: String,
        #[serde(default)]
        pub balance: Option<i64>,
    }

    pub type APIResponse = AccountResponse;
}

pub mod get_accounts {
    use super::*;

    pub type APIResponse = AccountsResponse;
}

pub mod get_accounts_by_user {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = AccountsResponse;
}

pub mod get_account {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub account_id: ID,
    }

    pub type APIResponse = AccountResponse;
}

pub mod get_account_by_number {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub number: String,
    }

    pub type APIResponse = AccountResponse;
}

pub mod update_account {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub account_id: ID,
    }

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub number: Option<String>,
        #[serde(default)]
        pub bank: Option<String>,
        #[serde(default)]
        pub balance: Option<i64>,
    }

    pub type APIResponse = AccountResponse;
}

pub mod delete_account {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub account_id: ID,
    }

    pub type APIResponse = AccountResponse;
}

pub mod transfer {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub from_account_number: String,
        pub withdraw_amount: i64,
        pub to_account_number: String,
        pub deposit_amount: i64,
    }

    /// The source account followed by the destination account
    pub type APIResponse = AccountsResponse;
}
