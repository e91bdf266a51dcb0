use chrono::{DateTime, NaiveDate, Utc};
use fincv_domain::{Document, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDTO {
    pub id: ID,
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
    pub created: DateTime<Utc>,
}

impl DocumentDTO {
    pub fn new(document: Document) -> Self {
        Self {
            id: document.id,
            user_id: document.user_id,
            title: document.title,
            amount: document.amount,
            partner: document.partner,
            bank: document.bank,
            account_number: document.account_number,
            partner_number: document.partner_number,
            due: document.due,
            classification_id: document.classification_id,
            content: document.content,
            path: document.path,
            created: document.created,
        }
    }
}
