use chrono::{FixedOffset, Offset, Utc};
use fincv_domain::{
    reminder_trigger::{DEFAULT_POLL_INTERVAL_SECS, DEFAULT_THRESHOLDS_SECS},
    ReminderSchedule,
};
use tracing::warn;

const DEFAULT_PORT: usize = 5000;
const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// How often the reminder job polls open transactions and at
    /// which seconds before their due it creates reminders
    pub reminder_schedule: ReminderSchedule,
    /// Offset every due time is normalized to. Bare dates and naive
    /// date-times are interpreted in this offset.
    pub local_offset: FixedOffset,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub clova_ocr_url: Option<String>,
    pub clova_ocr_secret: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or("PORT", DEFAULT_PORT);

        let poll_interval_secs =
            parse_env_or("REMINDER_POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS);
        let thresholds_secs = match std::env::var("REMINDER_THRESHOLDS_SECS") {
            Ok(raw) => match raw
                .split(',')
                .map(|t| t.trim().parse::<i64>())
                .collect::<Result<Vec<_>, _>>()
            {
                Ok(thresholds) => thresholds,
                Err(_) => {
                    warn!(
                        "The given REMINDER_THRESHOLDS_SECS: {} is not a comma separated list of seconds, falling back to the default: {:?}.",
                        raw, DEFAULT_THRESHOLDS_SECS
                    );
                    DEFAULT_THRESHOLDS_SECS.to_vec()
                }
            },
            Err(_) => DEFAULT_THRESHOLDS_SECS.to_vec(),
        };
        let reminder_schedule = match ReminderSchedule::new(poll_interval_secs, thresholds_secs) {
            Ok(schedule) => schedule,
            Err(e) => {
                warn!(
                    "Invalid reminder settings: {}, falling back to the default reminder settings.",
                    e
                );
                ReminderSchedule::default()
            }
        };

        let offset_hours = parse_env_or("LOCAL_UTC_OFFSET_HOURS", DEFAULT_UTC_OFFSET_HOURS);
        let local_offset = match FixedOffset::east_opt(offset_hours * 3600) {
            Some(offset) => offset,
            None => {
                warn!(
                    "The given LOCAL_UTC_OFFSET_HOURS: {} is out of range, falling back to the default offset: {}.",
                    offset_hours, DEFAULT_UTC_OFFSET_HOURS
                );
                default_local_offset()
            }
        };

        let ocr = OcrConfig {
            openai_api_key: non_empty_env("OPENAI_API_KEY"),
            openai_model: non_empty_env("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.into()),
            openai_base_url: non_empty_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.into()),
            clova_ocr_url: non_empty_env("CLOVA_OCR_URL"),
            clova_ocr_secret: non_empty_env("CLOVA_OCR_SECRET"),
        };

        Self {
            port,
            reminder_schedule,
            local_offset,
            ocr,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn default_local_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600).unwrap_or_else(|| Utc.fix())
}

fn parse_env_or<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, raw, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
