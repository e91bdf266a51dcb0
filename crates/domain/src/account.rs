use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// A bank `Account` owned by a user, identified towards the outside
/// by its account `number`.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: ID,
    pub user_id: ID,
    pub number: String,
    pub bank: String,
    /// Balance in whole KRW. Only transfers check it against a floor.
    pub balance: i64,
    /// How many outgoing transfers this account has made
    pub usage_count: i64,
    pub created: DateTime<Utc>,
}

impl Account {
    pub fn new(user_id: ID, number: String, bank: String, balance: i64, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            user_id,
            number,
            bank,
            balance,
            usage_count: 0,
            created: now,
        }
    }
}

impl Entity for Account {
    fn id(&self) -> &ID {
        &self.id
    }
}
