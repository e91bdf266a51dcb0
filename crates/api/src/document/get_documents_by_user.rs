use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_documents_by_user::{APIResponse, PathParams};
use fincv_domain::{Document, ID};
use fincv_infra::FincvContext;

pub async fn get_documents_by_user_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = GetDocumentsByUserUseCase {
        user_id: path.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|documents| HttpResponse::Ok().json(APIResponse::new(documents)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetDocumentsByUserUseCase {
    user_id: ID,
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
impl UseCase for GetDocumentsByUserUseCase {
    type Response = Vec<Document>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDocumentsByUser";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .documents
            .find_by_user(&self.user_id, None)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
