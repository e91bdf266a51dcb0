mod account;
mod document;
mod due;
pub mod ocr_mapper;
mod reminder;
pub mod reminder_trigger;
mod shared;
mod transaction;
mod transfer;

pub use account::Account;
pub use document::{Document, NewDocument, MAX_CLASSIFICATION_ID};
pub use due::{DueValue, InvalidDueValue, DATE_ONLY_DUE_HOUR, MAX_DUE_YEAR, MIN_DUE_YEAR};
pub use ocr_mapper::{map_ocr_text, OcrMapError};
pub use reminder::{Reminder, DEFAULT_REMINDER_DELAY_SECS};
pub use reminder_trigger::{ReminderSchedule, Trigger};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use transaction::{Transaction, DEFAULT_DUE_MINUTES, RECURRING_REFRESH_MINUTES};
pub use transfer::{Transfer, TransferError};
