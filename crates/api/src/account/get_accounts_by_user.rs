use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_accounts_by_user::{APIResponse, PathParams};
use fincv_domain::{Account, ID};
use fincv_infra::FincvContext;

pub async fn get_accounts_by_user_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = GetAccountsByUserUseCase {
        user_id: path.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|accounts| HttpResponse::Ok().json(APIResponse::new(accounts)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetAccountsByUserUseCase {
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
impl UseCase for GetAccountsByUserUseCase {
    type Response = Vec<Account>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAccountsByUser";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .accounts
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
