use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::create_transaction::{APIResponse, RequestBody};
use fincv_domain::{DueValue, Transaction, DEFAULT_DUE_MINUTES, ID};
use fincv_infra::FincvContext;

pub async fn create_transaction_controller(
    ctx: web::Data<FincvContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let body = body.0;
    let usecase = CreateTransactionUseCase {
        user_id: body.user_id,
        partner_id: body.partner_id,
        title: body.title,
        balance: body.balance,
        due: body.due,
        closed: body.closed.unwrap_or(false),
        recurring: body.recurring.unwrap_or(false),
    };

    execute(usecase, &ctx)
        .await
        .map(|transaction| HttpResponse::Created().json(APIResponse::new(transaction)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct CreateTransactionUseCase {
    user_id: ID,
    partner_id: ID,
    title: String,
    balance: i64,
    due: Option<DueValue>,
    closed: bool,
    recurring: bool,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    InvalidBalance(i64),
    InvalidDue(DueValue),
}

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
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
impl UseCase for CreateTransactionUseCase {
    type Response = Transaction;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateTransaction";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        if !Transaction::valid_balance(self.balance) {
            return Err(UseCaseError::InvalidBalance(self.balance));
        }

        let now = ctx.sys.now();
        let due = self.due.unwrap_or_else(|| {
            DueValue::minutes_from(now, &ctx.config.local_offset, DEFAULT_DUE_MINUTES)
        });
        if due.normalize(&ctx.config.local_offset).is_none() {
            return Err(UseCaseError::InvalidDue(due));
        }
        let transaction = Transaction {
            id: Default::default(),
            user_id: self.user_id,
            partner_id: self.partner_id,
            title: self.title.clone(),
            balance: self.balance,
            due,
            closed: self.closed,
            recurring: self.recurring,
            created: now,
        };

        ctx.repos
            .transactions
            .insert(&transaction)
            .await
            .map(|_| transaction)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use fincv_infra::ISys;
    use std::sync::Arc;

    struct StaticTimeSys {}
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            Utc.with_ymd_and_hms(2024, 3, 10, 3, 0, 0)
                .unwrap()
                .timestamp_millis()
        }
    }

    fn usecase(balance: i64, due: Option<DueValue>) -> CreateTransactionUseCase {
        CreateTransactionUseCase {
            user_id: ID::new(),
            partner_id: ID::new(),
            title: "월세".into(),
            balance,
            due,
            closed: false,
            recurring: false,
        }
    }

    #[actix_web::test]
    async fn due_defaults_to_ten_minutes_from_now() {
        let mut ctx = FincvContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});

        let transaction = usecase(500_000, None).execute(&ctx).await.unwrap();
        let due = transaction.due.normalize(&ctx.config.local_offset).unwrap();
        assert_eq!(due, ctx.sys.now() + Duration::minutes(10));
        assert_eq!(due.offset(), &ctx.config.local_offset);
        assert!(ctx.repos.transactions.find(&transaction.id).await.is_some());
    }

    #[actix_web::test]
    async fn keeps_given_due() {
        let ctx = FincvContext::create_inmemory();
        let due: DueValue = "2024-03-10".parse().unwrap();

        let transaction = usecase(0, Some(due)).execute(&ctx).await.unwrap();
        assert_eq!(transaction.due, due);
    }

    #[actix_web::test]
    async fn rejects_negative_balance() {
        let ctx = FincvContext::create_inmemory();

        assert!(matches!(
            usecase(-1, None).execute(&ctx).await,
            Err(UseCaseError::InvalidBalance(-1))
        ));
        assert!(ctx.repos.transactions.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_unrepresentable_due() {
        let mut ctx = FincvContext::create_inmemory();
        ctx.config.local_offset = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
        let due = DueValue::Naive(chrono::NaiveDateTime::MIN);

        let res = usecase(0, Some(due)).execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidDue(d)) if d == due));
        assert!(ctx.repos.transactions.find_all().await.unwrap().is_empty());
    }
}
