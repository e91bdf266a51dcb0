use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::clear_document_content::{APIResponse, PathParams};
use fincv_domain::{Document, ID};
use fincv_infra::FincvContext;

pub async fn clear_document_content_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = ClearDocumentContentUseCase {
        document_id: path.document_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|document| HttpResponse::Ok().json(APIResponse::new(document)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct ClearDocumentContentUseCase {
    document_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    NotFound(ID),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The document with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ClearDocumentContentUseCase {
    type Response = Document;

    type Error = UseCaseError;

    const NAME: &'static str = "ClearDocumentContent";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let mut document = ctx
            .repos
            .documents
            .find(&self.document_id)
            .await
            .ok_or(UseCaseError::NotFound(self.document_id))?;

        document.content = None;
        ctx.repos
            .documents
            .save(&document)
            .await
            .map(|_| document)
            .map_err(|_| UseCaseError::StorageError)
    }
}
