mod helpers;

use chrono::{Duration, FixedOffset, TimeZone};
use fincv_domain::{reminder_trigger::DEFAULT_THRESHOLDS_SECS, ReminderSchedule};
use fincv_infra::{ISys, Repos};
use fincv_sdk::{CreateTransactionInput, DueValue, ID};
use helpers::setup::spawn_app_with;
use std::sync::Arc;

/// Frozen at 2024-03-10 11:56:00 in UTC+9
struct StaticTimeSys {}

impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        local_offset()
            .with_ymd_and_hms(2024, 3, 10, 11, 56, 0)
            .unwrap()
            .timestamp_millis()
    }
}

fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

#[actix_web::test]
async fn test_job_creates_reminder_for_due_transaction() {
    let (_, sdk) = spawn_app_with(|ctx| {
        ctx.sys = Arc::new(StaticTimeSys {});
        ctx.config.local_offset = local_offset();
        ctx.config.reminder_schedule =
            ReminderSchedule::new(1, DEFAULT_THRESHOLDS_SECS.to_vec()).unwrap();
        ctx.repos = Repos::create_inmemory(local_offset());
    })
    .await;
    let user_id = ID::new();

    let now = local_offset().with_ymd_and_hms(2024, 3, 10, 11, 56, 0).unwrap();
    let due = now + Duration::seconds(240);
    let transaction = sdk
        .transaction
        .create(CreateTransactionInput {
            user_id,
            partner_id: ID::new(),
            title: "전기료".into(),
            balance: 12345,
            due: Some(DueValue::Zoned(due)),
            closed: None,
            recurring: None,
        })
        .await
        .expect("Expected to create transaction")
        .transaction;

    let mut reminders = Vec::new();
    for _ in 0..50 {
        actix_web::rt::time::sleep(std::time::Duration::from_millis(100)).await;
        reminders = sdk
            .reminder
            .get_by_transaction(transaction.id)
            .await
            .unwrap()
            .reminders;
        if !reminders.is_empty() {
            break;
        }
    }
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].title, "240초 전 만기: 전기료");
    assert_eq!(reminders[0].user_id, user_id);
    assert_eq!(reminders[0].remind_at, now.with_timezone(&chrono::Utc));
    assert!(!reminders[0].status);

    // Later ticks at the same time find the reminder already there
    actix_web::rt::time::sleep(std::time::Duration::from_millis(1500)).await;
    let reminders = sdk
        .reminder
        .get_by_transaction(transaction.id)
        .await
        .unwrap()
        .reminders;
    assert_eq!(reminders.len(), 1);

    let open = sdk
        .reminder
        .get_by_user_and_status(user_id, false)
        .await
        .unwrap()
        .reminders;
    assert_eq!(open.len(), 1);
}
