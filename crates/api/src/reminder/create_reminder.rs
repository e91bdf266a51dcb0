use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Duration, Utc};
use fincv_api_structs::create_reminder::{APIResponse, RequestBody};
use fincv_domain::{Reminder, DEFAULT_REMINDER_DELAY_SECS, ID};
use fincv_infra::FincvContext;

pub async fn create_reminder_controller(
    ctx: web::Data<FincvContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        transaction_id: body.transaction_id,
        user_id: body.user_id,
        title: body.title,
        remind_at: body.remind_at,
        status: body.status.unwrap_or(false),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct CreateReminderUseCase {
    transaction_id: ID,
    user_id: ID,
    title: String,
    remind_at: Option<DateTime<Utc>>,
    status: bool,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    AlreadyExists(ID, DateTime<Utc>),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::AlreadyExists(transaction_id, remind_at) => Self::Conflict(format!(
                "The transaction: {} already has a reminder at: {}",
                transaction_id, remind_at
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let remind_at = self
            .remind_at
            .unwrap_or_else(|| now + Duration::seconds(DEFAULT_REMINDER_DELAY_SECS));
        let reminder = Reminder {
            id: Default::default(),
            transaction_id: self.transaction_id,
            user_id: self.user_id,
            title: self.title.clone(),
            remind_at,
            status: self.status,
            created: now,
        };

        match ctx.repos.reminders.insert_if_absent(&reminder).await {
            Ok(true) => Ok(reminder),
            Ok(false) => Err(UseCaseError::AlreadyExists(self.transaction_id, remind_at)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
