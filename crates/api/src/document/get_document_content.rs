use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_document_content::{APIResponse, PathParams};
use fincv_domain::ID;
use fincv_infra::FincvContext;

pub async fn get_document_content_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let document_id = path.document_id;
    let usecase = GetDocumentContentUseCase { document_id };

    execute(usecase, &ctx)
        .await
        .map(|content| {
            HttpResponse::Ok().json(APIResponse {
                document_id,
                content,
            })
        })
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetDocumentContentUseCase {
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
impl UseCase for GetDocumentContentUseCase {
    type Response = Option<String>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDocumentContent";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .documents
            .find(&self.document_id)
            .await
            .map(|document| document.content)
            .ok_or(UseCaseError::NotFound(self.document_id))
    }
}
