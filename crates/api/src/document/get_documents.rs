use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_documents::{APIResponse, QueryParams};
use fincv_domain::{Document, ID};
use fincv_infra::FincvContext;

pub async fn get_documents_controller(
    ctx: web::Data<FincvContext>,
    query: web::Query<QueryParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = GetDocumentsUseCase {
        user_id: query.user_id,
        classification_id: query.classification_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|documents| HttpResponse::Ok().json(APIResponse::new(documents)))
        .map_err(FincvError::from)
}

/// Lists every document unless a user is given. The classification
/// filter is ignored without a user.
#[derive(Debug)]
struct GetDocumentsUseCase {
    user_id: Option<ID>,
    classification_id: Option<u8>,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDocumentsUseCase {
    type Response = Vec<Document>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDocuments";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let res = match &self.user_id {
            Some(user_id) => {
                ctx.repos
                    .documents
                    .find_by_user(user_id, self.classification_id)
                    .await
            }
            None => ctx.repos.documents.find_all().await,
        };
        res.map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use fincv_domain::NewDocument;

    async fn insert_document(ctx: &FincvContext, user_id: ID, classification_id: u8) -> Document {
        let document = NewDocument {
            user_id,
            title: "카드값".into(),
            amount: 1,
            partner: "".into(),
            bank: "".into(),
            account_number: "".into(),
            partner_number: "".into(),
            due: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            classification_id,
            content: None,
            path: None,
        }
        .into_document(ctx.sys.now());
        ctx.repos.documents.insert(&document).await.unwrap();
        document
    }

    #[actix_web::test]
    async fn classification_only_filters_with_user() {
        let ctx = FincvContext::create_inmemory();
        let user_id = ID::new();
        insert_document(&ctx, user_id, 1).await;
        let card = insert_document(&ctx, user_id, 4).await;
        insert_document(&ctx, ID::new(), 4).await;

        let mut usecase = GetDocumentsUseCase {
            user_id: None,
            classification_id: Some(4),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().len(), 3);

        let mut usecase = GetDocumentsUseCase {
            user_id: Some(user_id),
            classification_id: None,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().len(), 2);

        let mut usecase = GetDocumentsUseCase {
            user_id: Some(user_id),
            classification_id: Some(4),
        };
        let documents = usecase.execute(&ctx).await.unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, card.id);
    }
}
