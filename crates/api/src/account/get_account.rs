use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_account::{APIResponse, PathParams};
use fincv_domain::{Account, ID};
use fincv_infra::FincvContext;

pub async fn get_account_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = GetAccountUseCase {
        account_id: path.account_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Ok().json(APIResponse::new(account)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetAccountUseCase {
    account_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The account with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAccountUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAccount";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .accounts
            .find(&self.account_id)
            .await
            .ok_or(UseCaseError::NotFound(self.account_id))
    }
}
