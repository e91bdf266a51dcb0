use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_reminders::APIResponse;
use fincv_domain::Reminder;
use fincv_infra::FincvContext;

pub async fn get_reminders_controller(
    ctx: web::Data<FincvContext>,
) -> Result<HttpResponse, FincvError> {
    execute(GetRemindersUseCase {}, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetRemindersUseCase {}

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
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
