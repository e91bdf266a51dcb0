use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::delete_account::{APIResponse, PathParams};
use fincv_domain::{Account, ID};
use fincv_infra::FincvContext;

pub async fn delete_account_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = DeleteAccountUseCase {
        account_id: path.account_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Ok().json(APIResponse::new(account)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct DeleteAccountUseCase {
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
impl UseCase for DeleteAccountUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteAccount";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .accounts
            .delete(&self.account_id)
            .await
            .ok_or(UseCaseError::NotFound(self.account_id))
    }
}
