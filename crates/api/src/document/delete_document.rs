use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::delete_document::{APIResponse, PathParams};
use fincv_domain::{Document, ID};
use fincv_infra::FincvContext;

pub async fn delete_document_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = DeleteDocumentUseCase {
        document_id: path.document_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|document| HttpResponse::Ok().json(APIResponse::new(document)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct DeleteDocumentUseCase {
    document_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The document with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteDocumentUseCase {
    type Response = Document;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteDocument";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .documents
            .delete(&self.document_id)
            .await
            .ok_or(UseCaseError::NotFound(self.document_id))
    }
}
