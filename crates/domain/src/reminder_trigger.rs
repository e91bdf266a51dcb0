use chrono::{DateTime, Duration, FixedOffset};
use thiserror::Error;

pub const DEFAULT_POLL_INTERVAL_SECS: i64 = 60;
pub const DEFAULT_THRESHOLDS_SECS: [i64; 6] = [240, 180, 150, 120, 90, 61];
/// Longest poll interval or threshold accepted, one day
pub const MAX_SCHEDULE_SECS: i64 = 24 * 60 * 60;

/// When reminders for an open `Transaction` should fire.
///
/// Every threshold is a number of seconds before the due time. The
/// scheduler polls every `poll_interval_secs` and fires a threshold on the
/// first poll that lands inside `[due - threshold, due - threshold + interval)`.
/// With exactly periodic polls every such window contains exactly one poll.
/// A poll that runs late can skip a window, in which case that threshold is
/// never fired for the transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderSchedule {
    poll_interval_secs: i64,
    thresholds_secs: Vec<i64>,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidReminderSchedule {
    #[error("Poll interval must be positive, got {0} seconds")]
    PollInterval(i64),
    #[error("At least one reminder threshold is required")]
    NoThresholds,
    #[error("Reminder thresholds must be positive, got {0} seconds")]
    Threshold(i64),
    #[error("Poll interval and thresholds cannot exceed one day, got {0} seconds")]
    TooLong(i64),
}

/// A threshold that is due to fire on the current poll
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub threshold_secs: i64,
    pub fire_at: DateTime<FixedOffset>,
}

impl ReminderSchedule {
    pub fn new(
        poll_interval_secs: i64,
        mut thresholds_secs: Vec<i64>,
    ) -> Result<Self, InvalidReminderSchedule> {
        if poll_interval_secs <= 0 {
            return Err(InvalidReminderSchedule::PollInterval(poll_interval_secs));
        }
        if thresholds_secs.is_empty() {
            return Err(InvalidReminderSchedule::NoThresholds);
        }
        if let Some(t) = thresholds_secs.iter().find(|t| **t <= 0) {
            return Err(InvalidReminderSchedule::Threshold(*t));
        }
        if let Some(secs) = std::iter::once(&poll_interval_secs)
            .chain(thresholds_secs.iter())
            .find(|secs| **secs > MAX_SCHEDULE_SECS)
        {
            return Err(InvalidReminderSchedule::TooLong(*secs));
        }
        thresholds_secs.sort_unstable_by(|a, b| b.cmp(a));
        thresholds_secs.dedup();

        Ok(Self {
            poll_interval_secs,
            thresholds_secs,
        })
    }

    pub fn poll_interval_secs(&self) -> i64 {
        self.poll_interval_secs
    }

    /// Thresholds in descending order
    pub fn thresholds_secs(&self) -> &[i64] {
        &self.thresholds_secs
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::seconds(self.poll_interval_secs)
    }

    /// The inclusive range of due times that can have a threshold firing at `now`.
    pub fn candidate_due_range(
        &self,
        now: DateTime<FixedOffset>,
    ) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        let min = self.thresholds_secs.last().copied().unwrap_or(0);
        let max = self.thresholds_secs.first().copied().unwrap_or(0);
        (
            now + Duration::seconds(min) - self.poll_interval(),
            now + Duration::seconds(max),
        )
    }

    /// Thresholds of a transaction due at `due` that fire on a poll at `now`.
    /// A threshold whose fire time cannot be represented never fires.
    pub fn due_triggers(
        &self,
        now: DateTime<FixedOffset>,
        due: DateTime<FixedOffset>,
    ) -> Vec<Trigger> {
        let interval = self.poll_interval();
        self.thresholds_secs
            .iter()
            .filter_map(|t| {
                due.checked_sub_signed(Duration::seconds(*t))
                    .map(|fire_at| Trigger {
                        threshold_secs: *t,
                        fire_at,
                    })
            })
            .filter(|trigger| should_fire(now, trigger.fire_at, interval))
            .collect()
    }
}

impl Default for ReminderSchedule {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            thresholds_secs: DEFAULT_THRESHOLDS_SECS.to_vec(),
        }
    }
}

/// `0 <= now - fire_at < interval`
pub fn should_fire(
    now: DateTime<FixedOffset>,
    fire_at: DateTime<FixedOffset>,
    interval: Duration,
) -> bool {
    let elapsed = now - fire_at;
    elapsed >= Duration::zero() && elapsed < interval
}

pub fn reminder_title(threshold_secs: i64, transaction_title: &str) -> String {
    format!("{}초 전 만기: {}", threshold_secs, transaction_title)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    fn kst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    fn due() -> DateTime<FixedOffset> {
        kst().with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
    }

    #[test]
    fn fire_window_is_right_open() {
        let fire_at = due();
        let interval = Duration::seconds(60);
        assert!(should_fire(fire_at, fire_at, interval));
        assert!(should_fire(fire_at + Duration::seconds(59), fire_at, interval));
        assert!(!should_fire(fire_at + Duration::seconds(60), fire_at, interval));
        assert!(!should_fire(fire_at - Duration::seconds(1), fire_at, interval));
    }

    #[test]
    fn periodic_polls_fire_every_threshold_once() {
        let schedule = ReminderSchedule::default();
        let start = due() - Duration::seconds(240);
        let mut fired = Vec::new();
        for tick in 0..6 {
            let now = start + Duration::seconds(60 * tick);
            for trigger in schedule.due_triggers(now, due()) {
                fired.push(trigger.threshold_secs);
            }
        }
        fired.sort_unstable();
        assert_eq!(fired, vec![61, 90, 120, 150, 180, 240]);
    }

    #[test]
    fn late_poll_skips_a_window() {
        let schedule = ReminderSchedule::default();
        let mut fired = Vec::new();
        for offset in &[-181, -119] {
            let now = due() + Duration::seconds(*offset);
            for trigger in schedule.due_triggers(now, due()) {
                fired.push(trigger.threshold_secs);
            }
        }
        assert!(!fired.contains(&180));
        assert!(fired.contains(&120));
    }

    #[test]
    fn candidate_range_covers_all_windows() {
        let schedule = ReminderSchedule::default();
        let now = due() - Duration::seconds(100);
        let (from, until) = schedule.candidate_due_range(now);
        assert_eq!(from, now + Duration::seconds(1));
        assert_eq!(until, now + Duration::seconds(240));
        assert!(from <= due() && due() <= until);
    }

    #[test]
    fn it_validates_settings() {
        assert_eq!(
            ReminderSchedule::new(0, vec![60]),
            Err(InvalidReminderSchedule::PollInterval(0))
        );
        assert_eq!(
            ReminderSchedule::new(60, vec![]),
            Err(InvalidReminderSchedule::NoThresholds)
        );
        assert_eq!(
            ReminderSchedule::new(60, vec![120, -5]),
            Err(InvalidReminderSchedule::Threshold(-5))
        );
        assert_eq!(
            ReminderSchedule::new(MAX_SCHEDULE_SECS + 1, vec![60]),
            Err(InvalidReminderSchedule::TooLong(MAX_SCHEDULE_SECS + 1))
        );
        assert_eq!(
            ReminderSchedule::new(60, vec![120, i64::MAX]),
            Err(InvalidReminderSchedule::TooLong(i64::MAX))
        );
        assert!(ReminderSchedule::new(MAX_SCHEDULE_SECS, vec![MAX_SCHEDULE_SECS]).is_ok());
        let schedule = ReminderSchedule::new(30, vec![61, 240, 61]).unwrap();
        assert_eq!(schedule.thresholds_secs(), &[240, 61]);
    }

    #[test]
    fn unrepresentable_fire_time_never_fires() {
        let schedule = ReminderSchedule::default();
        let earliest = DateTime::<chrono::Utc>::MIN_UTC.with_timezone(&kst());
        assert!(schedule.due_triggers(earliest, earliest).is_empty());
    }

    #[test]
    fn title_mentions_threshold() {
        assert_eq!(reminder_title(240, "전기료"), "240초 전 만기: 전기료");
    }
}
