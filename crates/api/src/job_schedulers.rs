use crate::shared::usecase::{execute, UseCase};
use chrono::Utc;
use fincv_domain::{reminder_trigger::reminder_title, Reminder};
use fincv_infra::FincvContext;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Outcome of one pass over the open transactions
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub scanned: usize,
    pub created: usize,
    pub skipped_existing: usize,
    pub failed: usize,
}

/// Creates the reminders of every open transaction that has a threshold
/// firing at the current time. Running it again in the same fire window
/// creates nothing new.
#[derive(Debug)]
pub struct GenerateTransactionRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GenerateTransactionRemindersUseCase {
    type Response = TickReport;

    type Error = UseCaseError;

    const NAME: &'static str = "GenerateTransactionReminders";

    async fn execute(&mut self, ctx: &FincvContext) -> Result<Self::Response, Self::Error> {
        let offset = ctx.config.local_offset;
        let schedule = &ctx.config.reminder_schedule;
        let created_at = ctx.sys.now();
        let now = created_at.with_timezone(&offset);

        let (from, until) = schedule.candidate_due_range(now);
        let transactions = ctx
            .repos
            .transactions
            .find_open_due_between(from.with_timezone(&Utc), until.with_timezone(&Utc))
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut report = TickReport {
            scanned: transactions.len(),
            ..Default::default()
        };
        for transaction in transactions {
            let due = match transaction.due.normalize(&offset) {
                Some(due) => due,
                None => {
                    report.failed += 1;
                    warn!(
                        "Skipping transaction: {} with unresolvable due: {}",
                        transaction.id, transaction.due
                    );
                    continue;
                }
            };
            for trigger in schedule.due_triggers(now, due) {
                let reminder = Reminder {
                    id: Default::default(),
                    transaction_id: transaction.id,
                    user_id: transaction.user_id,
                    title: reminder_title(trigger.threshold_secs, &transaction.title),
                    remind_at: trigger.fire_at.with_timezone(&Utc),
                    status: false,
                    created: created_at,
                };

                match ctx.repos.reminders.insert_if_absent(&reminder).await {
                    Ok(true) => {
                        report.created += 1;
                        info!(
                            "Created reminder: {} for transaction: {} at: {}",
                            reminder.title, transaction.id, reminder.remind_at
                        );
                    }
                    Ok(false) => {
                        report.skipped_existing += 1;
                        debug!(
                            "Transaction: {} already has a reminder at: {}",
                            transaction.id, reminder.remind_at
                        );
                    }
                    Err(e) => {
                        report.failed += 1;
                        error!(
                            "Unable to create reminder for transaction: {}. Error: {:?}",
                            transaction.id, e
                        );
                    }
                }
            }
        }

        info!("Transaction reminders tick: {:?}", report);
        Ok(report)
    }
}

/// Calls `tick` every `period` until the `token` is cancelled. A tick that
/// is already running is finished before the loop stops, and a slow tick
/// pushes the following ticks back instead of bursting to catch up.
pub async fn run_periodic<F, Fut>(period: Duration, token: CancellationToken, mut tick: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = interval.tick() => {}
        }
        tick().await;
    }
}

/// Handle of the background reminder job
pub struct ReminderJob {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ReminderJob {
    /// Stops the job after its current tick and waits for it to finish
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(e) = self.handle.await {
            error!("The transaction reminders job did not stop cleanly: {:?}", e);
        }
    }
}

pub fn start_transaction_reminders_job(ctx: FincvContext) -> ReminderJob {
    let token = CancellationToken::new();
    let period = Duration::from_secs(ctx.config.reminder_schedule.poll_interval_secs() as u64);
    info!(
        "Starting transaction reminders job polling every {:?} with thresholds: {:?}",
        period,
        ctx.config.reminder_schedule.thresholds_secs()
    );

    let job_token = token.clone();
    let handle = actix_web::rt::spawn(async move {
        run_periodic(period, job_token, move || {
            let ctx = ctx.clone();
            async move {
                // Errors are logged by `execute`, the next tick tries again
                let _ = execute(GenerateTransactionRemindersUseCase {}, &ctx).await;
            }
        })
        .await;
        info!("Transaction reminders job stopped");
    });

    ReminderJob { token, handle }
}
