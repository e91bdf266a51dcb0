use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_reminders_by_transaction::{APIResponse, PathParams};
use fincv_domain::{Reminder, ID};
use fincv_infra::FincvContext;

pub async fn get_reminders_by_transaction_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = GetRemindersByTransactionUseCase {
        transaction_id: path.transaction_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetRemindersByTransactionUseCase {
    transaction_id: ID,
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
impl UseCase for GetRemindersByTransactionUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetRemindersByTransaction";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find_by_transaction(&self.transaction_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
