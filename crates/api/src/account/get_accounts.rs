use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_accounts::APIResponse;
use fincv_domain::Account;
use fincv_infra::FincvContext;

pub async fn get_accounts_controller(
    ctx: web::Data<FincvContext>,
) -> Result<HttpResponse, FincvError> {
    execute(GetAccountsUseCase {}, &ctx)
        .await
        .map(|accounts| HttpResponse::Ok().json(APIResponse::new(accounts)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetAccountsUseCase {}

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
impl UseCase for GetAccountsUseCase {
    type Response = Vec<Account>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAccounts";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .accounts
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
