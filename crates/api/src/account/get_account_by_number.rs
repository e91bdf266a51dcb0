use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_account_by_number::{APIResponse, PathParams};
use fincv_domain::Account;
use fincv_infra::FincvContext;

pub async fn get_account_by_number_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = GetAccountByNumberUseCase {
        number: path.into_inner().number,
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Ok().json(APIResponse::new(account)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetAccountByNumberUseCase {
    number: String,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(String),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(number) => Self::NotFound(format!(
                "The account with number: {}, was not found.",
                number
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAccountByNumberUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAccountByNumber";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .accounts
            .find_by_number(&self.number)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.number.clone()))
    }
}
