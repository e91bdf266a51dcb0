use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::set_document_content::{APIResponse, PathParams, RequestBody};
use fincv_domain::{Document, ID};
use fincv_infra::FincvContext;

pub async fn set_document_content_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let usecase = SetDocumentContentUseCase {
        document_id: path.document_id,
        content: body.0.content,
    };

    execute(usecase, &ctx)
        .await
        .map(|document| HttpResponse::Ok().json(APIResponse::new(document)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct SetDocumentContentUseCase {
    document_id: ID,
    content: String,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    NotFound(ID),
    EmptyContent,
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The document with id: {}, was not found.", id))
            }
            UseCaseError::EmptyContent => Self::BadClientData(
                "The content cannot be blank, clear it instead".into(),
            ),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetDocumentContentUseCase {
    type Response = Document;

    type Error = UseCaseError;

    const NAME: &'static str = "SetDocumentContent";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        if self.content.trim().is_empty() {
            return Err(UseCaseError::EmptyContent);
        }
        let mut document = ctx
            .repos
            .documents
            .find(&self.document_id)
            .await
            .ok_or(UseCaseError::NotFound(self.document_id))?;

        document.content = Some(self.content.clone());
        ctx.repos
            .documents
            .save(&document)
            .await
            .map(|_| document)
            .map_err(|_| UseCaseError::StorageError)
    }
}
