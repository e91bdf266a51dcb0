use crate::{
    document::{CreateDocumentError, CreateDocumentUseCase},
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::ingest_create::{APIResponse, RequestBody};
use fincv_domain::{map_ocr_text, Document, OcrMapError, ID};
use fincv_infra::FincvContext;

pub async fn ingest_create_controller(
    ctx: web::Data<FincvContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let body = body.0;
    let usecase = IngestCreateUseCase {
        user_id: body.user_id,
        ocr_text: body.ocr_text,
    };

    execute(usecase, &ctx)
        .await
        .map(|document| {
            let ocr_text = document.content.clone().unwrap_or_default();
            HttpResponse::Created().json(APIResponse::new(document, ocr_text))
        })
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct IngestCreateUseCase {
    user_id: ID,
    ocr_text: String,
}

#[derive(Debug)]
enum UseCaseError {
    InvalidText(OcrMapError),
    CreateDocument(CreateDocumentError),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidText(e) => Self::BadClientData(e.to_string()),
            UseCaseError::CreateDocument(e) => e.into(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for IngestCreateUseCase {
    type Response = Document;

    type Error = UseCaseError;

    const NAME: &'static str = "IngestCreate";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let document = map_ocr_text(self.user_id, &self.ocr_text).map_err(UseCaseError::InvalidText)?;

        CreateDocumentUseCase { document }
            .execute(ctx)
            .await
            .map_err(UseCaseError::CreateDocument)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    #[actix_web::test]
    async fn creates_document_from_text() {
        let ctx = FincvContext::create_inmemory();
        let text = "서류 종류 : 카드명세서\n제목 : 전기료\n거래금액 : 12,345원\n지불기일 : 2024.03.10";

        let mut usecase = IngestCreateUseCase {
            user_id: ID::new(),
            ocr_text: text.into(),
        };
        let document = usecase.execute(&ctx).await.unwrap();
        assert_eq!(document.title, "전기료");
        assert_eq!(document.amount, 12345);
        assert_eq!(document.classification_id, 4);
        assert_eq!(document.due, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(document.content.as_deref(), Some(text));
        assert!(ctx.repos.documents.find(&document.id).await.is_some());
    }

    #[actix_web::test]
    async fn rejects_text_without_due_date() {
        let ctx = FincvContext::create_inmemory();

        let mut usecase = IngestCreateUseCase {
            user_id: ID::new(),
            ocr_text: "제목 : 전기료\n지불기일 : 다음달".into(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidText(OcrMapError::MissingDueDate { .. }))
        ));
        assert!(ctx.repos.documents.find_all().await.unwrap().is_empty());
    }
}
