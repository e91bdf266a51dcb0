use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::create_account::{APIResponse, RequestBody};
use fincv_domain::{Account, ID};
use fincv_infra::FincvContext;

pub async fn create_account_controller(
    ctx: web::Data<FincvContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let body = body.0;
    let usecase = CreateAccountUseCase {
        user_id: body.user_id,
        number: body.number,
        bank: body.bank,
        balance: body.balance.unwrap_or(0),
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Created().json(APIResponse::new(account)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct CreateAccountUseCase {
    user_id: ID,
    number: String,
    bank: String,
    balance: i64,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    InvalidNumber,
    NumberTaken(String),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
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
impl UseCase for CreateAccountUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateAccount";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let number = self.number.trim();
        if number.is_empty() {
            return Err(UseCaseError::InvalidNumber);
        }
        if ctx.repos.accounts.find_by_number(number).await.is_some() {
            return Err(UseCaseError::NumberTaken(number.to_string()));
        }

        let account = Account::new(
            self.user_id,
            number.to_string(),
            self.bank.clone(),
            self.balance,
            ctx.sys.now(),
        );
        ctx.repos
            .accounts
            .insert(&account)
            .await
            .map(|_| account)
            .map_err(|_| UseCaseError::StorageError)
    }
}
