use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::ingest_preview::{APIResponse, RequestBody};
use fincv_infra::{FincvContext, OcrProviderError};

pub async fn ingest_preview_controller(
    ctx: web::Data<FincvContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let body = body.0;
    let usecase = IngestPreviewUseCase {
        image: body.image,
        model: body.model,
    };

    execute(usecase, &ctx)
        .await
        .map(|ocr_text| HttpResponse::Ok().json(APIResponse { ocr_text }))
        .map_err(FincvError::from)
}

/// Reads the image of a financial document into the `key : value` lines
/// that can be reviewed before they are ingested.
struct IngestPreviewUseCase {
    image: String,
    model: Option<String>,
}

// The image is a large base64 payload, keep it out of the logs
impl std::fmt::Debug for IngestPreviewUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestPreviewUseCase")
            .field("image_len", &self.image.len())
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug)]
struct UseCaseError(OcrProviderError);

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e.0 {
            e @ OcrProviderError::InvalidImage => Self::BadClientData(e.to_string()),
            e => Self::UpstreamFailure(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for IngestPreviewUseCase {
    type Response = String;

    type Error = UseCaseError;

    const NAME: &'static str = "IngestPreview";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let model = self
            .model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty());
        ctx.ocr
            .extract_fields_from_image(&self.image, model)
            .await
            .map_err(UseCaseError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::{http::StatusCode, ResponseError};
    use fincv_infra::StaticOcrProvider;
    use std::sync::Arc;

    fn setup() -> FincvContext {
        let mut ctx = FincvContext::create_inmemory();
        ctx.ocr = Arc::new(StaticOcrProvider::new("제목 : 전기료"));
        ctx
    }

    #[actix_web::test]
    async fn returns_extracted_text() {
        let ctx = setup();

        let mut usecase = IngestPreviewUseCase {
            image: "data:image/png;base64,aGVsbG8=".into(),
            model: None,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap(), "제목 : 전기료");
    }

    #[actix_web::test]
    async fn invalid_image_is_a_client_error() {
        let ctx = setup();

        let mut usecase = IngestPreviewUseCase {
            image: "hello".into(),
            model: None,
        };
        let err = FincvError::from(usecase.execute(&ctx).await.unwrap_err());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn provider_failures_are_upstream_failures() {
        let err = FincvError::from(UseCaseError(OcrProviderError::EmptyResult));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        let err = FincvError::from(UseCaseError(OcrProviderError::NotConfigured(
            "missing OPENAI_API_KEY".into(),
        )));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
