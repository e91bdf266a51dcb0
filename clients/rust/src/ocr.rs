use crate::{APIResponse, BaseClient, ID};
use fincv_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct OcrClient {
    base: Arc<BaseClient>,
}

pub struct IngestPreviewInput {
    /// `data:image/<format>;base64,<data>`
    pub image: String,
    pub model: Option<String>,
}

impl OcrClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn ingest_preview(
        &self,
        input: IngestPreviewInput,
    ) -> APIResponse<ingest_preview::APIResponse> {
        let body = ingest_preview::RequestBody {
            image: input.image,
            model: input.model,
        };
        self.base
            .post(body, "ocr/ingest-preview".into(), StatusCode::OK)
            .await
    }

    pub async fn ingest_create(
        &self,
        user_id: ID,
        ocr_text: String,
    ) -> APIResponse<ingest_create::APIResponse> {
        let body = ingest_create::RequestBody { user_id, ocr_text };
        self.base
            .post(body, "ocr/ingest-create".into(), StatusCode::CREATED)
            .await
    }
}
