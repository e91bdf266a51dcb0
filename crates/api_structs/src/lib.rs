mod account;
mod document;
mod ocr;
mod reminder;
mod status;
mod transaction;

pub mod dtos {
    pub use crate::account::dtos::*;
    pub use crate::document::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::transaction::dtos::*;
}

pub use crate::account::api::*;
pub use crate::document::api::*;
pub use crate::ocr::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
pub use crate::transaction::api::*;
