use crate::dtos::DocumentDTO;
use chrono::NaiveDate;
use fincv_domain::{Document, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub document: DocumentDTO,
}

impl DocumentResponse {
    pub fn new(document: Document) -> Self {
        Self {
            document: DocumentDTO::new(document),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsResponse {
    pub documents: Vec<DocumentDTO>,
}

impl DocumentsResponse {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents: documents.into_iter().map(DocumentDTO::new).collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct DocumentPathParams {
    pub document_id: ID,
}

pub mod create_document {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: ID,
        pub title: String,
        pub amount: i64,
        pub partner: String,
        pub bank: String,
        pub account_number: String,
        pub partner_number: String,
        pub due: NaiveDate,
        pub classification_id: u8,
        #[serde(default)]
        pub content: Option<String>,
        #[serde(default)]
        pub path: Option<String>,
    }

    pub type APIResponse = DocumentResponse;
}

pub mod get_documents {
    use super::*;

    /// `classificationId` only filters together with `userId`
    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub user_id: Option<ID>,
        pub classification_id: Option<u8>,
    }

    pub type APIResponse = DocumentsResponse;
}

pub mod get_documents_by_user {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = DocumentsResponse;
}

pub mod get_document {
    use super::*;

    pub type PathParams = DocumentPathParams;
    pub type APIResponse = DocumentResponse;
}

pub mod update_document {
    use super::*;

    pub type PathParams = DocumentPathParams;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: Option<String>,
        pub amount: Option<i64>,
        pub partner: Option<String>,
        pub bank: Option<String>,
        pub account_number: Option<String>,
        pub partner_number: Option<String>,
        pub due: Option<NaiveDate>,
        pub classification_id: Option<u8>,
        pub content: Option<String>,
        pub path: Option<String>,
    }

    pub type APIResponse = DocumentResponse;
}

pub mod delete_document {
    use super::*;

    pub type PathParams = DocumentPathParams;
    pub type APIResponse = DocumentResponse;
}

pub mod get_document_content {
    use super::*;

    pub type PathParams = DocumentPathParams;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub document_id: ID,
        pub content: Option<String>,
    }
}

pub mod set_document_content {
    use super::*;

    pub type PathParams = DocumentPathParams;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub content: String,
    }

    pub type APIResponse = DocumentResponse;
}

pub mod clear_document_content {
    use super::*;

    pub type PathParams = DocumentPathParams;
    pub type APIResponse = DocumentResponse;
}
