use crate::due::DueValue;
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// Minutes until a new `Transaction` without an explicit due expires
pub const DEFAULT_DUE_MINUTES: i64 = 10;
/// Minutes a recurring `Transaction` is pushed forward on refresh
pub const RECURRING_REFRESH_MINUTES: i64 = 5;

/// An open or closed financial obligation that expires at `due`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: ID,
    pub user_id: ID,
    /// The counterparty of this transaction
    pub partner_id: ID,
    pub title: String,
    pub balance: i64,
    pub due: DueValue,
    pub closed: bool,
    pub recurring: bool,
    pub created: DateTime<Utc>,
}

impl Transaction {
    pub fn valid_balance(balance: i64) -> bool {
        balance >= 0
    }
}

impl Entity for Transaction {
    fn id(&self) -> &ID {
        &self.id
    }
}
