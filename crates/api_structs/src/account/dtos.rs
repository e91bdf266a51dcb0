use chrono::{DateTime, Utc};
use fincv_domain::{Account, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountDTO {
    pub id: ID,
    pub user_id: ID,
    pub number: String,
    pub bank: String,
    pub balance: i64,
    pub usage_count: i64,
    pub created: DateTime<Utc>,
}

impl AccountDTO {
    pub fn new(account: Account) -> Self {
        Self {
            id: account.id,
            user_id: account.user_id,
            number: account.number,
            bank: account.bank,
            balance: account.balance,
            usage_count: account.usage_count,
            created: account.created,
        }
    }
}
