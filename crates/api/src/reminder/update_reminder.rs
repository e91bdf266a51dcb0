use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use fincv_api_structs::update_reminder::{APIResponse, PathParams, RequestBody};
use fincv_domain::{Reminder, ID};
use fincv_infra::FincvContext;

pub async fn update_reminder_controller(
    ctx: web::Data<FincvContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path.reminder_id,
        title: body.title,
        remind_at: body.remind_at,
        status: body.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct UpdateReminderUseCase {
    reminder_id: ID,
    title: Option<String>,
    remind_at: Option<DateTime<Utc>>,
    status: Option<bool>,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    NotFound(ID),
    AlreadyExists(ID, DateTime<Utc>),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The reminder with id: {}, was not found.", id))
            }
            UseCaseError::AlreadyExists(transaction_id, remind_at) => Self::Conflict(format!(
                "The transaction: {} already has a reminder at: {}",
                transaction_id, remind_at
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id)
            .await
            .ok_or(UseCaseError::NotFound(self.reminder_id))?;

        if let Some(remind_at) = self.remind_at {
            if remind_at != reminder.remind_at {
                let taken = ctx
                    .repos
                    .reminders
                    .find_by_transaction_and_remind_at(&reminder.transaction_id, remind_at)
                    .await
                    .is_some();
                if taken {
                    return Err(UseCaseError::AlreadyExists(
                        reminder.transaction_id,
                        remind_at,
                    ));
                }
                reminder.remind_at = remind_at;
            }
        }
        if let Some(title) = &self.title {
            reminder.title = title.clone();
        }
        if let Some(status) = self.status {
            reminder.status = status;
        }

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Duration;

    async fn insert_reminder(ctx: &FincvContext, transaction_id: ID, remind_at: DateTime<Utc>) -> Reminder {
        let reminder = Reminder {
            id: Default::default(),
            transaction_id,
            user_id: ID::new(),
            title: "61초 전 만기: 보험료".into(),
            remind_at,
            status: false,
            created: ctx.sys.now(),
        };
        assert!(ctx.repos.reminders.insert_if_absent(&reminder).await.unwrap());
        reminder
    }

    #[actix_web::test]
    async fn marks_reminder_done() {
        let ctx = FincvContext::create_inmemory();
        let reminder = insert_reminder(&ctx, ID::new(), ctx.sys.now()).await;

        let mut usecase = UpdateReminderUseCase {
            reminder_id: reminder.id,
            title: None,
            remind_at: None,
            status: Some(true),
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert!(updated.status);
        assert_eq!(updated.title, reminder.title);
        assert!(ctx.repos.reminders.find(&reminder.id).await.unwrap().status);
    }

    #[actix_web::test]
    async fn rejects_moving_onto_existing_reminder() {
        let ctx = FincvContext::create_inmemory();
        let transaction_id = ID::new();
        let now = ctx.sys.now();
        let first = insert_reminder(&ctx, transaction_id, now).await;
        let second = insert_reminder(&ctx, transaction_id, now + Duration::seconds(30)).await;

        let mut usecase = UpdateReminderUseCase {
            reminder_id: second.id,
            title: None,
            remind_at: Some(first.remind_at),
            status: None,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::AlreadyExists(_, _))
        ));
        assert_eq!(ctx.repos.reminders.find(&second.id).await.unwrap(), second);
    }
}
