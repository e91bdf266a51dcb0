mod helpers;

use helpers::setup::spawn_app;
use fincv_sdk::{
    APIErrorVariant, CreateAccountInput, CreateReminderInput, CreateTransactionInput,
    TransferInput, UpdateAccountInput, UpdateReminderInput, UpdateTransactionInput, ID,
};

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    let res = sdk.status.check_health().await.expect("Expected the server to be up");
    assert_eq!(res.message, "Fincv is up and running");
}

fn account_input(user_id: ID, number: &str, balance: i64) -> CreateAccountInput {
    CreateAccountInput {
        user_id,
        number: number.into(),
        bank: "국민".into(),
        balance: Some(balance),
    }
}

#[actix_web::test]
async fn test_crud_account() {
    let (_, sdk) = spawn_app().await;
    let user_id = ID::new();

    let account = sdk
        .account
        .create(account_input(user_id, "123-456", 1000))
        .await
        .expect("Expected to create account")
        .account;
    assert_eq!(account.user_id, user_id);
    assert_eq!(account.balance, 1000);
    assert_eq!(account.usage_count, 0);

    let by_number = sdk
        .account
        .get_by_number("123-456")
        .await
        .expect("Expected to find account by number")
        .account;
    assert_eq!(by_number.id, account.id);

    let by_user = sdk.account.get_by_user(user_id).await.unwrap().accounts;
    assert_eq!(by_user.len(), 1);

    let updated = sdk
        .account
        .update(UpdateAccountInput {
            account_id: account.id,
            number: None,
            bank: Some("신한".into()),
            balance: None,
        })
        .await
        .expect("Expected to update account")
        .account;
    assert_eq!(updated.bank, "신한");
    assert_eq!(updated.number, "123-456");
    assert_eq!(updated.balance, 1000);

    let deleted = sdk.account.delete(account.id).await.unwrap().account;
    assert_eq!(deleted.id, account.id);

    let err = sdk.account.get(account.id).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}

#[actix_web::test]
async fn test_account_numbers_are_unique() {
    let (_, sdk) = spawn_app().await;

    sdk.account
        .create(account_input(ID::new(), "123-456", 0))
        .await
        .expect("Expected to create account");
    let err = sdk
        .account
        .create(account_input(ID::new(), "123-456", 0))
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Conflict);
}

#[actix_web::test]
async fn test_transfer() {
    let (_, sdk) = spawn_app().await;
    sdk.account
        .create(account_input(ID::new(), "100-1", 1000))
        .await
        .unwrap();
    sdk.account
        .create(account_input(ID::new(), "200-2", 50))
        .await
        .unwrap();

    let accounts = sdk
        .account
        .transfer(TransferInput {
            from_account_number: "100-1".into(),
            withdraw_amount: 400,
            to_account_number: "200-2".into(),
            deposit_amount: 400,
        })
        .await
        .expect("Expected transfer to succeed")
        .accounts;
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].number, "100-1");
    assert_eq!(accounts[0].balance, 600);
    assert_eq!(accounts[0].usage_count, 1);
    assert_eq!(accounts[1].number, "200-2");
    assert_eq!(accounts[1].balance, 450);

    // More than the remaining balance
    let err = sdk
        .account
        .transfer(TransferInput {
            from_account_number: "100-1".into(),
            withdraw_amount: 601,
            to_account_number: "200-2".into(),
            deposit_amount: 601,
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);

    let err = sdk
        .account
        .transfer(TransferInput {
            from_account_number: "100-1".into(),
            withdraw_amount: 10,
            to_account_number: "999-9".into(),
            deposit_amount: 10,
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);

    let from = sdk.account.get_by_number("100-1").await.unwrap().account;
    assert_eq!(from.balance, 600);
}

#[actix_web::test]
async fn test_crud_transaction() {
    let (app, sdk) = spawn_app().await;
    let user_id = ID::new();

    let transaction = sdk
        .transaction
        .create(CreateTransactionInput {
            user_id,
            partner_id: ID::new(),
            title: "관리비".into(),
            balance: 150000,
            due: None,
            closed: None,
            recurring: Some(true),
        })
        .await
        .expect("Expected to create transaction")
        .transaction;
    assert!(!transaction.closed);
    assert!(transaction.recurring);
    let due = transaction.due.normalize(&app.ctx.config.local_offset).unwrap();
    assert!(due.with_timezone(&chrono::Utc) > transaction.created);

    let updated = sdk
        .transaction
        .update(UpdateTransactionInput {
            transaction_id: transaction.id,
            due: Some("2024-03-10".parse().unwrap()),
            closed: Some(true),
            ..Default::default()
        })
        .await
        .expect("Expected to update transaction")
        .transaction;
    assert!(updated.closed);
    assert_eq!(updated.due.to_string(), "2024-03-10");
    assert_eq!(updated.title, "관리비");

    let refreshed = sdk
        .transaction
        .refresh_recurring(transaction.id)
        .await
        .expect("Expected to refresh transaction")
        .transaction;
    assert_ne!(refreshed.due.to_string(), "2024-03-10");

    let by_user = sdk.transaction.get_by_user(user_id).await.unwrap().transactions;
    assert_eq!(by_user.len(), 1);

    sdk.transaction.delete(transaction.id).await.unwrap();
    let err = sdk.transaction.get(transaction.id).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}

#[actix_web::test]
async fn test_transaction_balance_cannot_be_negative() {
    let (_, sdk) = spawn_app().await;

    let err = sdk
        .transaction
        .create(CreateTransactionInput {
            user_id: ID::new(),
            partner_id: ID::new(),
            title: "관리비".into(),
            balance: -1,
            due: None,
            closed: None,
            recurring: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);
}

#[actix_web::test]
async fn test_crud_reminder() {
    let (_, sdk) = spawn_app().await;
    let user_id = ID::new();
    let transaction_id = ID::new();

    let reminder = sdk
        .reminder
        .create(CreateReminderInput {
            transaction_id,
            user_id,
            title: "관리비 납부".into(),
            remind_at: None,
            status: None,
        })
        .await
        .expect("Expected to create reminder")
        .reminder;
    assert!(!reminder.status);
    assert!(reminder.remind_at > reminder.created);

    // Same transaction and remind_at
    let err = sdk
        .reminder
        .create(CreateReminderInput {
            transaction_id,
            user_id,
            title: "관리비 납부".into(),
            remind_at: Some(reminder.remind_at),
            status: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Conflict);

    let open = sdk
        .reminder
        .get_by_user_and_status(user_id, false)
        .await
        .unwrap()
        .reminders;
    assert_eq!(open.len(), 1);

    let done = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder.id,
            status: Some(true),
            ..Default::default()
        })
        .await
        .expect("Expected to update reminder")
        .reminder;
    assert!(done.status);
    assert_eq!(done.title, "관리비 납부");

    let open = sdk
        .reminder
        .get_by_user_and_status(user_id, false)
        .await
        .unwrap()
        .reminders;
    assert!(open.is_empty());
    let done = sdk
        .reminder
        .get_by_user_and_status(user_id, true)
        .await
        .unwrap()
        .reminders;
    assert_eq!(done.len(), 1);

    let by_transaction = sdk
        .reminder
        .get_by_transaction(transaction_id)
        .await
        .unwrap()
        .reminders;
    assert_eq!(by_transaction.len(), 1);

    sdk.reminder.delete(reminder.id).await.unwrap();
    let err = sdk.reminder.get(reminder.id).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}
