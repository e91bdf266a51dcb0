use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::update_document::{APIResponse, PathParams, RequestBody};
use fincv_domain::{Document, ID, MAX_CLASSIFICATION_ID};
use fincv_infra::FincvContext;

pub async fn update_document_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let usecase = UpdateDocumentUseCase {
        document_id: path.document_id,
        update: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|document| HttpResponse::Ok().json(APIResponse::new(document)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct UpdateDocumentUseCase {
    document_id: ID,
    update: RequestBody,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    NotFound(ID),
    InvalidClassification(u8),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The document with id: {}, was not found.", id))
            }
            UseCaseError::InvalidClassification(id) => Self::BadClientData(format!(
                "Invalid classification id: {}, expected a value between 0 and {}",
                id, MAX_CLASSIFICATION_ID
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateDocumentUseCase {
    type Response = Document;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateDocument";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let mut document = ctx
            .repos
            .documents
            .find(&self.document_id)
            .await
            .ok_or(UseCaseError::NotFound(self.document_id))?;

        let update = std::mem::take(&mut self.update);
        if let Some(classification_id) = update.classification_id {
            if !Document::valid_classification(classification_id) {
                return Err(UseCaseError::InvalidClassification(classification_id));
            }
            document.classification_id = classification_id;
        }
        if let Some(title) = update.title {
            document.title = title;
        }
        if let Some(amount) = update.amount {
            document.amount = amount;
        }
        if let Some(partner) = update.partner {
            document.partner = partner;
        }
        if let Some(bank) = update.bank {
            document.bank = bank;
        }
        if let Some(account_number) = update.account_number {
            document.account_number = account_number;
        }
        if let Some(partner_number) = update.partner_number {
            document.partner_number = partner_number;
        }
        if let Some(due) = update.due {
            document.due = due;
        }
        if update.content.is_some() {
            document.content = update.content;
        }
        if update.path.is_some() {
            document.path = update.path;
        }

        ctx.repos
            .documents
            .save(&document)
            .await
            .map(|_| document)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use fincv_domain::NewDocument;

    async fn insert_document(ctx: &FincvContext) -> Document {
        let document = NewDocument {
            user_id: ID::new(),
            title: "수도요금".into(),
            amount: 30000,
            partner: "수도사업소".into(),
            bank: "농협".into(),
            account_number: "1".into(),
            partner_number: "2".into(),
            due: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            classification_id: 0,
            content: Some("원문".into()),
            path: None,
        }
        .into_document(ctx.sys.now());
        ctx.repos.documents.insert(&document).await.unwrap();
        document
    }

    #[actix_web::test]
    async fn updates_only_given_fields() {
        let ctx = FincvContext::create_inmemory();
        let document = insert_document(&ctx).await;

        let mut usecase = UpdateDocumentUseCase {
            document_id: document.id,
            update: RequestBody {
                amount: Some(31000),
                classification_id: Some(1),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.amount, 31000);
        assert_eq!(updated.classification_id, 1);
        assert_eq!(updated.title, document.title);
        assert_eq!(updated.content, document.content);
        assert_eq!(ctx.repos.documents.find(&document.id).await.unwrap(), updated);
    }

    #[actix_web::test]
    async fn rejects_invalid_classification() {
        let ctx = FincvContext::create_inmemory();
        let document = insert_document(&ctx).await;

        let mut usecase = UpdateDocumentUseCase {
            document_id: document.id,
            update: RequestBody {
                title: Some("변경".into()),
                classification_id: Some(9),
                ..Default::default()
            },
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidClassification(9))
        ));
        assert_eq!(ctx.repos.documents.find(&document.id).await.unwrap(), document);
    }
}
