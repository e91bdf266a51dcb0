use crate::{
    error::FincvError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use fincv_api_structs::transfer::{APIResponse, RequestBody};
use fincv_domain::{Account, Transfer, TransferError};
use fincv_infra::FincvContext;
use tracing::info;

pub async fn transfer_controller(
    ctx: web::Data<FincvContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, FincvError> {
    let body = body.0;
    let usecase = TransferUseCase {
        from_account_number: body.from_account_number,
        withdraw_amount: body.withdraw_amount,
        to_account_number: body.to_account_number,
        deposit_amount: body.deposit_amount,
    };

    execute(usecase, &ctx)
        .await
        .map(|(from, to)| HttpResponse::Ok().json(APIResponse::new(vec![from, to])))
        .map_err(FincvError::from)
}

#[derive(Debug)]
struct TransferUseCase {
    from_account_number: String,
    withdraw_amount: i64,
    to_account_number: String,
    deposit_amount: i64,
}

#[derive(Debug)]
struct UseCaseError(TransferError);

impl From<UseCaseError> for FincvError {
    fn from(e: UseCaseError) -> Self {
        match e.0 {
            TransferError::StorageError => Self::InternalError,
            e @ TransferError::AccountNotFound(_) => Self::NotFound(e.to_string()),
            e => Self::BadClientData(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for TransferUseCase {
    /// The source and the destination account after the transfer
    type Response = (Account, Account);

    type Error = UseCaseError;

    const NAME: &'static str = "Transfer";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let transfer = Transfer::new(
            self.from_account_number.trim().to_string(),
            self.withdraw_amount,
            self.to_account_number.trim().to_string(),
            self.deposit_amount,
        )
        .map_err(UseCaseError)?;

        let (from, to) = ctx
            .repos
            .accounts
            .transfer(&transfer)
            .await
            .map_err(UseCaseError)?;
        info!(
            "Transferred {} from account: {} to account: {}",
            transfer.amount, from.id, to.id
        );
        Ok((from, to))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use fincv_domain::ID;

    struct TestContext {
        ctx: FincvContext,
        from: Account,
        to: Account,
    }

    async fn setup(from_balance: i64, to_balance: i64) -> TestContext {
        let ctx = FincvContext::create_inmemory();
        let now = ctx.sys.now();
        let from = Account::new(ID::new(), "100-1".into(), "국민".into(), from_balance, now);
        let to = Account::new(ID::new(), "200-2".into(), "신한".into(), to_balance, now);
        ctx.repos.accounts.insert(&from).await.unwrap();
        ctx.repos.accounts.insert(&to).await.unwrap();

        TestContext { ctx, from, to }
    }

    fn usecase(withdraw_amount: i64, deposit_amount: i64) -> TransferUseCase {
        TransferUseCase {
            from_account_number: "100-1".into(),
            withdraw_amount,
            to_account_number: "200-2".into(),
            deposit_amount,
        }
    }

    #[actix_web::test]
    async fn moves_balance_between_accounts() {
        let TestContext { ctx, from, to } = setup(1000, 50).await;

        let (new_from, new_to) = usecase(400, 400).execute(&ctx).await.unwrap();
        assert_eq!(new_from.id, from.id);
        assert_eq!(new_from.balance, 600);
        assert_eq!(new_from.usage_count, 1);
        assert_eq!(new_to.id, to.id);
        assert_eq!(new_to.balance, 450);
        assert_eq!(new_to.usage_count, 0);

        assert_eq!(ctx.repos.accounts.find(&from.id).await.unwrap().balance, 600);
        assert_eq!(ctx.repos.accounts.find(&to.id).await.unwrap().balance, 450);
    }

    #[actix_web::test]
    async fn whole_balance_can_be_transferred() {
        let TestContext { ctx, .. } = setup(1000, 0).await;

        let (from, to) = usecase(1000, 1000).execute(&ctx).await.unwrap();
        assert_eq!(from.balance, 0);
        assert_eq!(to.balance, 1000);
    }

    #[actix_web::test]
    async fn rejected_transfers_leave_balances_unchanged() {
        let TestContext { ctx, from, to } = setup(1000, 50).await;

        let cases = vec![
            (usecase(1001, 1001), "InsufficientBalance"),
            (usecase(0, 0), "InvalidAmount"),
            (usecase(-5, -5), "InvalidAmount"),
            (usecase(10, 20), "AmountMismatch"),
        ];
        for (usecase, expected) in cases {
            let err = execute(usecase, &ctx).await.unwrap_err();
            assert!(format!("{:?}", err).contains(expected));
        }

        let mut unknown = usecase(10, 10);
        unknown.to_account_number = "999".into();
        assert_eq!(
            unknown.execute(&ctx).await.unwrap_err().0,
            TransferError::AccountNotFound("999".into())
        );

        let mut same = usecase(10, 10);
        same.to_account_number = "100-1".into();
        assert_eq!(
            same.execute(&ctx).await.unwrap_err().0,
            TransferError::SameAccount
        );

        let stored_from = ctx.repos.accounts.find(&from.id).await.unwrap();
        let stored_to = ctx.repos.accounts.find(&to.id).await.unwrap();
        assert_eq!(stored_from, from);
        assert_eq!(stored_to, to);
    }

    #[test]
    fn maps_errors_to_status() {
        use actix_web::{http::StatusCode, ResponseError};

        let status = |e: TransferError| FincvError::from(UseCaseError(e)).status_code();
        assert_eq!(status(TransferError::InvalidAmount), StatusCode::BAD_REQUEST);
        assert_eq!(
            status(TransferError::InsufficientBalance {
                balance: 1,
                needed: 2
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(TransferError::BalanceOverflow {
                balance: i64::MAX,
                amount: 1
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(TransferError::AccountNotFound("1".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(TransferError::StorageError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
