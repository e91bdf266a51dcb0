use crate::dtos::TransactionDTO;
use fincv_domain::{DueValue, Transaction, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub transaction: TransactionDTO,
}

impl TransactionResponse {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction: TransactionDTO::new(transaction),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionDTO>,
}

impl TransactionsResponse {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: transactions.into_iter().map(TransactionDTO::new).collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct TransactionPathParams {
    pub transaction_id: ID,
}

pub mod create_transaction {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: ID,
        pub partner_id: ID,
        pub title: String,
        pub balance: i64,
        /// Defaults to ten minutes from now
        #[serde(default)]
        pub due: Option<DueValue>,
        #[serde(default)]
        pub closed: Option<bool>,
        #[serde(default)]
        pub recurring: Option<bool>,
    }

    pub type APIResponse = TransactionResponse;
}

pub mod get_transactions {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        /// Only the transactions that are not closed
        pub open: Option<bool>,
    }

    pub type APIResponse = TransactionsResponse;
}

pub mod get_transactions_by_user {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = TransactionsResponse;
}

pub mod get_transaction {
    use super::*;

    pub type PathParams = TransactionPathParams;
    pub type APIResponse = TransactionResponse;
}

pub mod update_transaction {
    use super::*;

    pub type PathParams = TransactionPathParams;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub partner_id: Option<ID>,
        pub title: Option<String>,
        pub balance: Option<i64>,
        pub due: Option<DueValue>,
        pub closed: Option<bool>,
        pub recurring: Option<bool>,
    }

    pub type APIResponse = TransactionResponse;
}

pub mod delete_transaction {
    use super::*;

    pub type PathParams = TransactionPathParams;
    pub type APIResponse = TransactionResponse;
}

pub mod refresh_recurring_transaction {
    use super::*;

    pub type PathParams = TransactionPathParams;
    pub type APIResponse = TransactionResponse;
}
