use super::{IOcrProvider, OcrProviderError};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

const INSTRUCTIONS: &str = include_str!("instructions.txt");
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Reads the text of the image with CLOVA OCR and lets an OpenAI model
/// classify it and extract the document fields from that text.
pub struct ClovaOpenAiOcrProvider {
    client: Client,
    clova_url: String,
    clova_secret: String,
    openai_api_key: String,
    openai_base_url: String,
    default_model: String,
}

/// Splits `data:image/<format>;base64,<data>` into the image format and the decoded bytes
pub(super) fn decode_image_data_url(data_url: &str) -> Result<(String, Vec<u8>), OcrProviderError> {
    let rest = data_url
        .trim()
        .strip_prefix("data:image/")
        .ok_or(OcrProviderError::InvalidImage)?;
    let (format, data) = rest
        .split_once(";base64,")
        .ok_or(OcrProviderError::InvalidImage)?;
    if format.is_empty() || !format.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(OcrProviderError::InvalidImage);
    }
    let bytes = STANDARD
        .decode(data.trim())
        .map_err(|_| OcrProviderError::InvalidImage)?;
    Ok((format.to_lowercase(), bytes))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClovaRequest<'a> {
    version: &'a str,
    request_id: String,
    timestamp: i64,
    images: Vec<ClovaImage<'a>>,
}

#[derive(Debug, Serialize)]
struct ClovaImage<'a> {
    format: &'a str,
    name: &'a str,
    data: String,
}

#[derive(Debug, Deserialize)]
struct ClovaResponse {
    #[serde(default)]
    images: Vec<ClovaImageResult>,
}

#[derive(Debug, Deserialize)]
struct ClovaImageResult {
    #[serde(default)]
    fields: Vec<ClovaField>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClovaField {
    #[serde(default)]
    infer_text: String,
}

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    input: Vec<OpenAiMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    output: Vec<OpenAiOutput>,
    #[serde(default)]
    output_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiOutput {
    #[serde(default)]
    content: Vec<OpenAiContent>,
}

#[derive(Debug, Deserialize)]
struct OpenAiContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl OpenAiResponse {
    fn text(self) -> String {
        let text = self
            .output
            .into_iter()
            .flat_map(|o| o.content)
            .filter(|c| c.kind == "output_text")
            .filter_map(|c| c.text)
            .collect::<String>();
        if text.trim().is_empty() {
            self.output_text.unwrap_or_default()
        } else {
            text
        }
    }
}

impl ClovaOpenAiOcrProvider {
    pub fn new(
        clova_url: String,
        clova_secret: String,
        openai_api_key: String,
        openai_base_url: String,
        default_model: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            clova_url,
            clova_secret,
            openai_api_key,
            openai_base_url,
            default_model,
        }
    }

    async fn read_text(&self, format: &str, image: &[u8]) -> Result<String, OcrProviderError> {
        let body = ClovaRequest {
            version: "V2",
            request_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            images: vec![ClovaImage {
                format,
                name: "preview",
                data: STANDARD.encode(image),
            }],
        };

        let res = self
            .client
            .post(&self.clova_url)
            .header("X-OCR-SECRET", &self.clova_secret)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("CLOVA OCR request failed: {:?}", e);
                OcrProviderError::Request(e.to_string())
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            error!("CLOVA OCR returned status {}: {}", status, body);
            return Err(OcrProviderError::Request(format!(
                "CLOVA OCR returned status {}",
                status
            )));
        }

        let res = res
            .json::<ClovaResponse>()
            .await
            .map_err(|e| OcrProviderError::MalformedResponse(e.to_string()))?;
        let image = res
            .images
            .into_iter()
            .next()
            .ok_or_else(|| OcrProviderError::MalformedResponse("no images in response".into()))?;

        let text = image
            .fields
            .into_iter()
            .map(|f| f.infer_text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        match text.trim() {
            "" => Err(OcrProviderError::EmptyResult),
            text => Ok(text.to_string()),
        }
    }

    async fn extract_fields(&self, ocr_text: &str, model: &str) -> Result<String, OcrProviderError> {
        let body = OpenAiRequest {
            model,
            input: vec![
                OpenAiMessage {
                    role: "system",
                    content: INSTRUCTIONS.to_string(),
                },
                OpenAiMessage {
                    role: "user",
                    content: format!("OCR TEXT:\n{}", ocr_text),
                },
            ],
            temperature: 0.0,
        };

        let res = self
            .client
            .post(format!("{}/responses", self.openai_base_url.trim_end_matches('/')))
            .bearer_auth(&self.openai_api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI request failed: {:?}", e);
                OcrProviderError::Request(e.to_string())
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            error!("OpenAI returned status {}: {}", status, body);
            return Err(OcrProviderError::Request(format!(
                "OpenAI returned status {}",
                status
            )));
        }

        let res = res
            .json::<OpenAiResponse>()
            .await
            .map_err(|e| OcrProviderError::MalformedResponse(e.to_string()))?;
        match res.text().trim() {
            "" => Err(OcrProviderError::EmptyResult),
            text => Ok(text.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl IOcrProvider for ClovaOpenAiOcrProvider {
    async fn extract_fields_from_image(
        &self,
        image_data_url: &str,
        model: Option<&str>,
    ) -> Result<String, OcrProviderError> {
        let (format, image) = decode_image_data_url(image_data_url)?;
        let ocr_text = self.read_text(&format, &image).await?;
        info!("CLOVA OCR read {} characters", ocr_text.chars().count());

        let model = model.unwrap_or(&self.default_model);
        self.extract_fields(&ocr_text, model).await
    }
}
