mod account;
mod base;
mod document;
mod ocr;
mod reminder;
mod status;
mod transaction;

use account::AccountClient;
pub use account::{CreateAccountInput, TransferInput, UpdateAccountInput};
pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use document::DocumentClient;
pub use document::{CreateDocumentInput, GetDocumentsInput, UpdateDocumentInput};
pub use fincv_api_structs::dtos::*;
pub use fincv_domain::{DueValue, ID};
use ocr::OcrClient;
pub use ocr::IngestPreviewInput;
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
use status::StatusClient;
use std::sync::Arc;
use transaction::TransactionClient;
pub use transaction::{CreateTransactionInput, UpdateTransactionInput};

// Domain
pub use fincv_api_structs::dtos::AccountDTO as Account;
pub use fincv_api_structs::dtos::DocumentDTO as Document;
pub use fincv_api_structs::dtos::ReminderDTO as Reminder;
pub use fincv_api_structs::dtos::TransactionDTO as Transaction;

/// Fincv Server SDK
///
/// The SDK contains methods for interacting with the Fincv server API.
#[derive(Clone)]
pub struct FincvSDK {
    pub account: AccountClient,
    pub document: DocumentClient,
    pub ocr: OcrClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub transaction: TransactionClient,
}

impl FincvSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let account = AccountClient::new(base.clone());
        let document = DocumentClient::new(base.clone());
        let ocr = OcrClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let transaction = TransactionClient::new(base);

        Self {
            account,
            document,
            ocr,
            reminder,
            status,
            transaction,
        }
    }
}
