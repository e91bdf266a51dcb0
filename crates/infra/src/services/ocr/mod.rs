mod clova_openai;

pub use clova_openai::ClovaOpenAiOcrProvider;

use crate::config::OcrConfig;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum OcrProviderError {
    #[error("The image must be a base64 encoded data url, e.g. data:image/png;base64,...")]
    InvalidImage,
    #[error("The ocr provider is not configured: {0}")]
    NotConfigured(String),
    #[error("Request to the ocr provider failed: {0}")]
    Request(String),
    #[error("The ocr provider returned an unexpected response: {0}")]
    MalformedResponse(String),
    #[error("The ocr provider returned an empty result")]
    EmptyResult,
}

/// Turns the image of a financial document into the eight
/// `key : value` lines the document mapper understands.
#[async_trait::async_trait]
pub trait IOcrProvider: Send + Sync {
    async fn extract_fields_from_image(
        &self,
        image_data_url: &str,
        model: Option<&str>,
    ) -> Result<String, OcrProviderError>;
}

/// Used when the credentials for the ocr services are missing
pub struct UnconfiguredOcrProvider {
    missing: Vec<&'static str>,
}

#[async_trait::async_trait]
impl IOcrProvider for UnconfiguredOcrProvider {
    async fn extract_fields_from_image(
        &self,
        _image_data_url: &str,
        _model: Option<&str>,
    ) -> Result<String, OcrProviderError> {
        Err(OcrProviderError::NotConfigured(format!(
            "missing {}",
            self.missing.join(", ")
        )))
    }
}

/// Returns the same text for every image
pub struct StaticOcrProvider {
    text: String,
}

impl StaticOcrProvider {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait::async_trait]
impl IOcrProvider for StaticOcrProvider {
    async fn extract_fields_from_image(
        &self,
        image_data_url: &str,
        _model: Option<&str>,
    ) -> Result<String, OcrProviderError> {
        clova_openai::decode_image_data_url(image_data_url)?;
        Ok(self.text.clone())
    }
}

pub fn create_ocr_provider(config: &OcrConfig) -> Arc<dyn IOcrProvider> {
    match (
        &config.openai_api_key,
        &config.clova_ocr_url,
        &config.clova_ocr_secret,
    ) {
        (Some(openai_api_key), Some(clova_url), Some(clova_secret)) => {
            Arc::new(ClovaOpenAiOcrProvider::new(
                clova_url.clone(),
                clova_secret.clone(),
                openai_api_key.clone(),
                config.openai_base_url.clone(),
                config.openai_model.clone(),
            ))
        }
        _ => {
            let mut missing = Vec::new();
            if config.openai_api_key.is_none() {
                missing.push("OPENAI_API_KEY");
            }
            if config.clova_ocr_url.is_none() {
                missing.push("CLOVA_OCR_URL");
            }
            if config.clova_ocr_secret.is_none() {
                missing.push("CLOVA_OCR_SECRET");
            }
            warn!(
                "Ocr ingestion is disabled. Missing environment variables: {}",
                missing.join(", ")
            );
            Arc::new(UnconfiguredOcrProvider { missing })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn unconfigured_provider_names_missing_settings() {
        let config = OcrConfig {
            openai_api_key: Some("key".into()),
            openai_model: "gpt-4o-mini".into(),
            openai_base_url: "http://localhost".into(),
            clova_ocr_url: None,
            clova_ocr_secret: None,
        };
        let provider = create_ocr_provider(&config);
        let res = provider
            .extract_fields_from_image("data:image/png;base64,aGVsbG8=", None)
            .await;
        match res {
            Err(OcrProviderError::NotConfigured(msg)) => {
                assert!(msg.contains("CLOVA_OCR_URL"));
                assert!(msg.contains("CLOVA_OCR_SECRET"));
                assert!(!msg.contains("OPENAI_API_KEY"));
            }
            _ => panic!("Expected the provider to be unconfigured"),
        }
    }

    #[tokio::test]
    async fn static_provider_validates_image() {
        let provider = StaticOcrProvider::new("제목 : 전기료");
        assert!(provider
            .extract_fields_from_image("not a data url", None)
            .await
            .is_err());
        assert_eq!(
            provider
                .extract_fields_from_image("data:image/png;base64,aGVsbG8=", None)
                .await
                .unwrap(),
            "제목 : 전기료"
        );
    }
}
