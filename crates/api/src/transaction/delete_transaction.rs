use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::delete_transaction::{APIResponse, PathParams};
use fincv_domain::{Transaction, ID};
use fincv_infra::FincvContext;

pub async fn delete_transaction_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = DeleteTransactionUseCase {
        transaction_id: path.transaction_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|transaction| HttpResponse::Ok().json(APIResponse::new(transaction)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct DeleteTransactionUseCase {
    transaction_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The transaction with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteTransactionUseCase {
    type Response = Transaction;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteTransaction";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .transactions
            .delete(&self.transaction_id)
            .await
            .ok_or(UseCaseError::NotFound(self.transaction_id))
    }
}
