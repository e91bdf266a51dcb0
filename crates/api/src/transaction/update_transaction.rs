use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::update_transaction::{APIResponse, PathParams, RequestBody};
use fincv_domain::{DueValue, Transaction, ID};
use fincv_infra::FincvContext;

pub async fn update_transaction_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let usecase = UpdateTransactionUseCase {
        transaction_id: path.transaction_id,
        update: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|transaction| HttpResponse::Ok().json(APIResponse::new(transaction)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct UpdateTransactionUseCase {
    transaction_id: ID,
    update: RequestBody,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    NotFound(ID),
    InvalidBalance(i64),
    InvalidDue(DueValue),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The transaction with id: {}, was not found.", id))
            }
            UseCaseError::InvalidBalance(balance) => Self::BadClientData(format!(
                "The balance: {} of a transaction cannot be negative",
                balance
            )),
            UseCaseError::InvalidDue(due) => Self::BadClientData(format!(
                "The due value: {} cannot be resolved to a point in time",
                due
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateTransactionUseCase {
    type Response = Transaction;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateTransaction";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        if let Some(balance) = self.update.balance {
            if !Transaction::valid_balance(balance) {
                return Err(UseCaseError::InvalidBalance(balance));
            }
        }

        let mut transaction = ctx
            .repos
            .transactions
            .find(&self.transaction_id)
            .await
            .ok_or(UseCaseError::NotFound(self.transaction_id))?;

        let update = std::mem::take(&mut self.update);
        if let Some(partner_id) = update.partner_id {
            transaction.partner_id = partner_id;
        }
        if let Some(title) = update.title {
            transaction.title = title;
        }
        if let Some(balance) = update.balance {
            transaction.balance = balance;
        }
        if let Some(due) = update.due {
            if due.normalize(&ctx.config.local_offset).is_none() {
                return Err(UseCaseError::InvalidDue(due));
            }
            transaction.due = due;
        }
        if let Some(closed) = update.closed {
            transaction.closed = closed;
        }
        if let Some(recurring) = update.recurring {
            transaction.recurring = recurring;
        }

        ctx.repos
            .transactions
            .save(&transaction)
            .await
            .map(|_| transaction)
            .map_err(|_| UseCaseError::StorageError)
    }
}
