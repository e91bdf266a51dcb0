use crate::{APIResponse, BaseClient, ID};
use chrono::NaiveDate;
use fincv_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct DocumentClient {
    base: Arc<BaseClient>,
}

pub struct CreateDocumentInput {
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

#[derive(Default)]
pub struct GetDocumentsInput {
    pub user_id: Option<ID>,
    pub classification_id: Option<u8>,
}

impl GetDocumentsInput {
    fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(user_id) = &self.user_id {
            params.push(format!("userId={}", user_id));
        }
        if let Some(classification_id) = self.classification_id {
            params.push(format!("classificationId={}", classification_id));
        }
        params.join("&")
    }
}

#[derive(Default)]
pub struct UpdateDocumentInput {
    pub document_id: ID,
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

impl DocumentClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateDocumentInput) -> APIResponse<create_document::APIResponse> {
        let body = create_document::RequestBody {
            user_id: input.user_id,
            title: input.title,
            amount: input.amount,
            partner: input.partner,
            bank: input.bank,
            account_number: input.account_number,
            partner_number: input.partner_number,
            due: input.due,
            classification_id: input.classification_id,
            content: input.content,
            path: input.path,
        };
        self.base
            .post(body, "documents".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self, input: GetDocumentsInput) -> APIResponse<get_documents::APIResponse> {
        self.base
            .get(
                format!("documents?{}", input.to_query_string()),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_by_user(&self, user_id: ID) -> APIResponse<get_documents_by_user::APIResponse> {
        self.base
            .get(format!("documents/user/{}", user_id), StatusCode::OK)
            .await
    }

    pub async fn get(&self, document_id: ID) -> APIResponse<get_document::APIResponse> {
        self.base
            .get(format!("documents/{}", document_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateDocumentInput) -> APIResponse<update_document::APIResponse> {
        let body = update_document::RequestBody {
            title: input.title,
            amount: input.amount,
            partner: input.partner,
            bank: input.bank,
            account_number: input.account_number,
            partner_number: input.partner_number,
            due: input.due,
            classification_id: input.classification_id,
            content: input.content,
            path: input.path,
        };
        self.base
            .put(body, format!("documents/{}", input.document_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, document_id: ID) -> APIResponse<delete_document::APIResponse> {
        self.base
            .delete(format!("documents/{}", document_id), StatusCode::OK)
            .await
    }

    pub async fn get_content(&self, document_id: ID) -> APIResponse<get_document_content::APIResponse> {
        self.base
            .get(format!("documents/{}/content", document_id), StatusCode::OK)
            .await
    }

    pub async fn set_content(
        &self,
        document_id: ID,
        content: String,
    ) -> APIResponse<set_document_content::APIResponse> {
        let body = set_document_content::RequestBody { content };
        self.base
            .patch(
                body,
                format!("documents/{}/content", document_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn clear_content(
        &self,
        document_id: ID,
    ) -> APIResponse<clear_document_content::APIResponse> {
        self.base
            .delete(format!("documents/{}/content", document_id), StatusCode::OK)
            .await
    }
}
