use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::get_transactions::{APIResponse, QueryParams};
use fincv_domain::Transaction;
use fincv_infra::FincvContext;

pub async fn get_transactions_controller(
    ctx: web::Data<FincvContext>,
    query: web::Query<QueryParams>,
) -> Result<HttpResponse, FincvError> {
    let usecase = GetTransactionsUseCase {
        only_open: query.open.unwrap_or(false),
    };

    execute(usecase, &ctx)
        .await
        .map(|transactions| HttpResponse::Ok().json(APIResponse::new(transactions)))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct GetTransactionsUseCase {
    only_open: bool,
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
impl UseCase for GetTransactionsUseCase {
    type Response = Vec<Transaction>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTransactions";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let res = if self.only_open {
            ctx.repos.transactions.find_open().await
        } else {
            ctx.repos.transactions.find_all().await
        };
        res.map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use fincv_domain::{DueValue, ID};

    async fn insert(ctx: &FincvContext, title: &str, closed: bool) {
        let transaction = Transaction {
            id: Default::default(),
            user_id: ID::new(),
            partner_id: ID::new(),
            title: title.into(),
            balance: 1000,
            due: DueValue::minutes_from(Utc::now(), &ctx.config.local_offset, 10),
            closed,
            recurring: false,
            created: Utc::now(),
        };
        ctx.repos.transactions.insert(&transaction).await.unwrap();
    }

    #[actix_web::test]
    async fn lists_only_open_transactions_when_asked() {
        let ctx = FincvContext::create_inmemory();
        insert(&ctx, "관리비", false).await;
        insert(&ctx, "전기료", true).await;

        let all = GetTransactionsUseCase { only_open: false }
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let open = GetTransactionsUseCase { only_open: true }
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].title, "관리비");
    }
}
