use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_transactions_by_user::{APIResponse, PathParams};
use fincv_domain::{Transaction, ID};
use fincv_infra::FincvContext;

pub async fn get_transactions_by_user_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = GetTransactionsByUserUseCase {
        user_id: path.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|transactions| HttpResponse::Ok().json(APIResponse::new(transactions)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetTransactionsByUserUseCase {
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
impl UseCase for GetTransactionsByUserUseCase {
    type Response = Vec<Transaction>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTransactionsByUser";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .transactions
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
