use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_reminders_by_user_and_status::{APIResponse, PathParams, QueryParams};
use fincv_domain::{Reminder, ID};
use fincv_infra::FincvContext;

pub async fn get_reminders_by_user_and_status_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
    query: web::Query<QueryParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = GetRemindersByUserAndStatusUseCase {
        user_id: path.user_id,
        is_done: query.is_done,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetRemindersByUserAndStatusUseCase {
    user_id: ID,
    is_done: bool,
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
impl UseCase for GetRemindersByUserAndStatusUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetRemindersByUserAndStatus";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find_by_user_and_status(&self.user_id, self.is_done)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
