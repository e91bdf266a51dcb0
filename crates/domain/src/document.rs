use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};

/// Highest classification id a `Document` can have
pub const MAX_CLASSIFICATION_ID: u8 = 4;

/// A financial document, usually created from the text a scanned
/// receipt or statement was reduced to.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: ID,
    pub user_id: ID,
    pub title: String,
    pub amount: i64,
    /// Name of the counterparty
    pub partner: String,
    pub bank: String,
    pub account_number: String,
    /// Account number of the counterparty
    pub partner_number: String,
    pub due: NaiveDate,
    /// 0 subscription, 1 invoice, 2 transfer slip, 3 bank statement, 4 card statement
    pub classification_id: u8,
    /// The raw text the document was extracted from
    pub content: Option<String>,
    pub path: Option<String>,
    pub created: DateTime<Utc>,
}

impl Document {
    pub fn valid_classification(classification_id: u8) -> bool {
        classification_id <= MAX_CLASSIFICATION_ID
    }
}

impl Entity for Document {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Everything needed to create a `Document`
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub user_id: ID,
    pub title: String,
    pub amount: i64,
    pub partner: String,
    pub bank: String,
    pub account_number: String,
    pub partner_number: String,
    pub due: NaiveDate,
    pub classification_id: u8,
    pub content: Option<String>,
    pub path: Option<String>,
}

impl NewDocument {
    pub fn into_document(self, now: DateTime<Utc>) -> Document {
        Document {
            id: Default::default(),
            user_id: self.user_id,
            title: self.title,
            amount: self.amount,
            partner: self.partner,
            bank: self.bank,
            account_number: self.account_number,
            partner_number: self.partner_number,
            due: self.due,
            classification_id: self.classification_id,
            content: self.content,
            path: self.path,
            created: now,
        }
    }
}
