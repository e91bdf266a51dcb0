use chrono::{DateTime, Utc};
use fincv_domain::{DueValue, Transaction, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDTO {
    pub id: ID,
    pub user_id: ID,
    pub partner_id: ID,
    pub title: String,
    pub balance: i64,
    pub due: DueValue,
    pub closed: bool,
    pub recurring: bool,
    pub created: DateTime<Utc>,
}

impl TransactionDTO {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            user_id: transaction.user_id,
            partner_id: transaction.partner_id,
            title: transaction.title,
            balance: transaction.balance,
            due: transaction.due,
            closed: transaction.closed,
            recurring: transaction.recurring,
            created: transaction.created,
        }
    }
}
