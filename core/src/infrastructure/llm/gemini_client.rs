use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    scan::{ports::LabelTranscriber, value_objects::LabelImage},
};

const SYSTEM_INSTRUCTION: &str = "You are an expert at reading food labels and extracting ingredient lists. Extract all ingredients from the image and return them as a clear list.";

const LABEL_PROMPT: &str = "Please analyze this food product label/image and extract: 1) Product name (if visible) 2) Complete list of ingredients. Return in format: PRODUCT: [name]\nINGREDIENTS: [comma-separated list]";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLabelTranscriber {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLabelTranscriber {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: GEMINI_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request(image: LabelImage) -> GeminiRequest {
        GeminiRequest {
            system_instruction: Some(Content {
                parts: vec![Part::Text {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            }),
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: LABEL_PROMPT.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type,
                            data: general_purpose::STANDARD.encode(&image.data),
                        },
                    },
                ],
            }],
        }
    }

    fn extract_text(response: GeminiResponse) -> Result<String, CoreError> {
        let text: String = response
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(CoreError::ExternalServiceError(
                "No response from LLM".to_string(),
            ));
        }

        Ok(text)
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        Self::extract_text(gemini_response)
    }
}

impl LabelTranscriber for GeminiLabelTranscriber {
    async fn transcribe_label(&self, image: LabelImage) -> Result<String, CoreError> {
        let request = Self::build_request(image);

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_body_carries_inline_image() {
        let request = GeminiLabelTranscriber::build_request(LabelImage {
            data: b"png-bytes".to_vec(),
            mime_type: "image/png".to_string(),
        });

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body["system_instruction"]["parts"][0]["text"],
            SYSTEM_INSTRUCTION
        );
        assert_eq!(body["contents"][0]["parts"][0]["text"], LABEL_PROMPT);
        assert_eq!(
            body["contents"][0]["parts"][1]["inline_data"]["mime_type"],
            "image/png"
        );
        assert_eq!(
            body["contents"][0]["parts"][1]["inline_data"]["data"],
            general_purpose::STANDARD.encode(b"png-bytes")
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "PRODUCT: Granola\n" },
                        { "text": "INGREDIENTS: oats, almonds" }
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(
            GeminiLabelTranscriber::extract_text(response).unwrap(),
            "PRODUCT: Granola\nINGREDIENTS: oats, almonds"
        );
    }

    #[test]
    fn test_extract_text_rejects_empty_response() {
        let response: GeminiResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();

        assert!(matches!(
            GeminiLabelTranscriber::extract_text(response),
            Err(CoreError::ExternalServiceError(_))
        ));
    }
}
