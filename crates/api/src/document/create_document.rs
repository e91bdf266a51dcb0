use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::create_document::{APIResponse, RequestBody};
use fincv_domain::{Document, NewDocument, MAX_CLASSIFICATION_ID};
use fincv_infra::FincvContext;

pub async fn create_document_controller(
    ctx: web::Data<FincvContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let body = body.0;
    let usecase = CreateDocumentUseCase {
        document: NewDocument {
            user_id: body.user_id,
            title: body.title,
            amount: body.amount,
            partner: body.partner,
            bank: body.bank,
            account_number: body.account_number,
            partner_number: body.partner_number,
            due: body.due,
            classification_id: body.classification_id,
            content: body.content,
            path: body.path,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|document| HttpResponse::Created().json(APIResponse::new(document)))
        .map_err(FincvError::from)
}

/// Stores a new `Document`. Also used by the ocr ingestion.
#[derive(Debug)]
pub struct CreateDocumentUseCase {
    pub document: NewDocument,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    InvalidClassification(u8),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::InvalidClassification(id) => Self::BadClientData(format!(
                "Invalid classification id: {}, expected a value between 0 and {}",
                id, MAX_CLASSIFICATION_ID
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateDocumentUseCase {
    type Response = Document;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateDocument";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        if !Document::valid_classification(self.document.classification_id) {
            return Err(UseCaseError::InvalidClassification(
                self.document.classification_id,
            ));
        }

        let document = self.document.clone().into_document(ctx.sys.now());
        ctx.repos
            .documents
            .insert(&document)
            .await
            .map(|_| document)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use fincv_domain::ID;

    fn new_document(classification_id: u8) -> NewDocument {
        NewDocument {
            user_id: ID::new(),
            title: "전기료".into(),
            amount: 12345,
            partner: "한국전력".into(),
            bank: "국민".into(),
            account_number: "111-222".into(),
            partner_number: "333-444".into(),
            due: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            classification_id,
            content: None,
            path: None,
        }
    }

    #[actix_web::test]
    async fn creates_document() {
        let ctx = FincvContext::create_inmemory();

        let mut usecase = CreateDocumentUseCase {
            document: new_document(4),
        };
        let document = usecase.execute(&ctx).await.unwrap();
        assert_eq!(document.title, "전기료");
        assert_eq!(
            ctx.repos.documents.find(&document.id).await.unwrap(),
            document
        );
    }

    #[actix_web::test]
    async fn rejects_unknown_classification() {
        let ctx = FincvContext::create_inmemory();

        let mut usecase = CreateDocumentUseCase {
            document: new_document(MAX_CLASSIFICATION_ID + 1),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidClassification(5))
        ));
        assert!(ctx.repos.documents.find_all().await.unwrap().is_empty());
    }
}
