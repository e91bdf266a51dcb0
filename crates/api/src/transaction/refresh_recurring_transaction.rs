use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::refresh_recurring_transaction::{APIResponse, PathParams};
use fincv_domain::{DueValue, Transaction, ID, RECURRING_REFRESH_MINUTES};
use fincv_infra::FincvContext;

pub async fn refresh_recurring_transaction_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = RefreshRecurringTransactionUseCase {
        transaction_id: path.transaction_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|transaction| HttpResponse::Ok().json(APIResponse::new(transaction)))
        .map_err(FincvError::from)
}

/// Starts the next period of a transaction by moving its due a few minutes
/// ahead of now.
#[derive(Debug)]
struct RefreshRecurringTransactionUseCase {
    transaction_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    NotFound(ID),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The transaction with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RefreshRecurringTransactionUseCase {
    type Response = Transaction;

    type Error = UseCaseError;

    const NAME: &'static str = "RefreshRecurringTransaction";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let mut transaction = ctx
            .repos
            .transactions
            .find(&self.transaction_id)
            .await
            .ok_or(UseCaseError::NotFound(self.transaction_id))?;

        transaction.due = DueValue::minutes_from(
            ctx.sys.now(),
            &ctx.config.local_offset,
            RECURRING_REFRESH_MINUTES,
        );

        ctx.repos
            .transactions
            .save(&transaction)
            .await
            .map(|_| transaction)
            .map_err(|_| UseCaseError::StorageError)
    }
}
