use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::update_account::{APIResponse, PathParams, RequestBody};
use fincv_domain::{Account, ID};
use fincv_infra::FincvContext;

pub async fn update_account_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let body = body.0;
    let usecase = UpdateAccountUseCase {
        account_id: path.account_id,
        number: body.number,
        bank: body.bank,
        balance: body.balance,
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Ok().json(APIResponse::new(account)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct UpdateAccountUseCase {
    account_id: ID,
    number: Option<String>,
    bank: Option<String>,
    balance: Option<i64>,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    NotFound(ID),
    InvalidNumber,
    NumberTaken(String),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The account with id: {}, was not found.", id))
            }
            UseCaseError::InvalidNumber => {
                Self::BadClientData("The account number cannot be empty".into())
            }
            UseCaseError::NumberTaken(number) => Self::Conflict(format!(
                "An account with number: {} already exists",
                number
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateAccountUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateAccount";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let mut account = ctx
            .repos
            .accounts
            .find(&self.account_id)
            .await
            .ok_or(UseCaseError::NotFound(self.account_id))?;

        if let Some(number) = &self.number {
            let number = number.trim();
            if number.is_empty() {
                return Err(UseCaseError::InvalidNumber);
            }
            if number != account.number {
                if let Some(other) = ctx.repos.accounts.find_by_number(number).await {
                    if other.id != account.id {
                        return Err(UseCaseError::NumberTaken(number.to_string()));
                    }
                }
                account.number = number.to_string();
            }
        }
        if let Some(bank) = &self.bank {
            account.bank = bank.clone();
        }
        if let Some(balance) = self.balance {
            account.balance = balance;
        }

        ctx.repos
            .accounts
            .save(&account)
            .await
            .map(|_| account)
            .map_err(|_| UseCaseError::StorageError)
    }
}
