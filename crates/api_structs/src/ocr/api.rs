use crate::dtos::DocumentDTO;
use fincv_domain::{Document, ID};
use serde::{Deserialize, Serialize};

pub mod ingest_preview {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Data url of the image, e.g. `data:image/png;base64,...`
        pub image: String,
        #[serde(default)]
        pub model: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub ocr_text: String,
    }
}

pub mod ingest_create {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: ID,
        pub ocr_text: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub document: DocumentDTO,
        pub ocr_text: String,
    }

    impl APIResponse {
        pub fn new(document: Document, ocr_text: String) -> Self {
            Self {
                document: DocumentDTO::new(document),
                ocr_text,
            }
        }
    }
}
