//! Health advice from Gemini. Callers only ever see advice text or the
//! fixed apology; the failure cause goes to the log.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful medical assistant for Aadharbhut Nagar Aspatal (Beltar Municipal Hospital). Provide concise health advice STRICTLY in Nepali language (using Devanagari script). Always state that this is AI advice and they should consult a real doctor for emergencies in Nepali.";

pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 0.8;
pub const TOP_K: u32 = 40;

pub const FALLBACK_ADVICE: &str =
    "माफ गर्नुहोला, अहिले जडानमा समस्या भयो। कृपया हाम्रो मेडिकल अफिसरसँग सम्पर्क गर्नुहोला।";

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gemini API error ({status}): {body}")]
    Api { status: StatusCode, body: String },
    #[error("response contained no text")]
    EmptyResponse,
}

#[async_trait]
pub trait Advisor: Send + Sync {
    async fn advise(&self, query: &str) -> Result<String, AdvisorError>;
}

/// Asks the advisor and collapses every failure into `FALLBACK_ADVICE`.
pub async fn health_advice(advisor: &dyn Advisor, query: &str) -> String {
    match advisor.advise(query).await {
        Ok(advice) => advice,
        Err(err) => {
            log::error!("Gemini error: {err}");
            FALLBACK_ADVICE.to_string()
        }
    }
}

#[derive(Clone, Debug)]
pub struct AdvisorConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl AdvisorConfig {
    pub fn enabled(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

pub struct GeminiClient {
    config: AdvisorConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Advisor for GeminiClient {
    async fn advise(&self, query: &str) -> Result<String, AdvisorError> {
        if !self.config.enabled() {
            return Err(AdvisorError::MissingApiKey);
        }

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        log::debug!("Gemini request to model {}", self.config.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateContentRequest::new(query))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Api { status, body });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(query: &str) -> Self {
        Self {
            system_instruction: Content::text(SYSTEM_INSTRUCTION),
            contents: vec![Content::text(query)],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                top_k: TOP_K,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, joined.
    fn text(&self) -> Result<String, AdvisorError> {
        let text: String = self
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AdvisorError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;

    /// Answers every query with a fixed result.
    pub(crate) struct StubAdvisor(pub Option<&'static str>);

    #[async_trait]
    impl Advisor for StubAdvisor {
        async fn advise(&self, _query: &str) -> Result<String, AdvisorError> {
            self.0
                .map(str::to_string)
                .ok_or(AdvisorError::EmptyResponse)
        }
    }

    #[test]
    fn request_carries_fixed_instruction_and_sampling() {
        let body = serde_json::to_value(GenerateContentRequest::new("टाउको दुख्यो")).unwrap();
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            json!(SYSTEM_INSTRUCTION)
        );
        assert_eq!(body["contents"][0]["parts"][0]["text"], json!("टाउको दुख्यो"));
        assert_eq!(body["generationConfig"]["topK"], json!(40));
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
        let top_p = body["generationConfig"]["topP"].as_f64().unwrap();
        assert!((top_p - 0.8).abs() < 1e-6);
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "पानी "}, {"text": "पिउनुहोस्।"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().unwrap(), "पानी पिउनुहोस्।");
    }

    #[test]
    fn empty_or_missing_candidates_are_errors() {
        let none: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(none.text(), Err(AdvisorError::EmptyResponse)));

        let blank: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "  "}]}}]
        }))
        .unwrap();
        assert!(matches!(blank.text(), Err(AdvisorError::EmptyResponse)));
    }

    #[tokio::test]
    async fn failures_collapse_to_fallback() {
        assert_eq!(health_advice(&StubAdvisor(None), "q").await, FALLBACK_ADVICE);
        assert_eq!(health_advice(&StubAdvisor(Some("सल्लाह")), "q").await, "सल्लाह");
    }

    #[tokio::test]
    async fn missing_key_fails_without_a_request() {
        let client = GeminiClient::new(AdvisorConfig {
            api_key: "  ".to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
        });
        assert!(matches!(
            client.advise("q").await,
            Err(AdvisorError::MissingApiKey)
        ));
        assert_eq!(health_advice(&client, "q").await, FALLBACK_ADVICE);
    }
}
