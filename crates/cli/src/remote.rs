//! HTTP clients for the text-generation and QR image services.

use deck_core::{Error, QrRenderer, Result, TextGenerator};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::RemoteConfig;

const QR_SIZE: &str = "200x200";

fn http_client(config: &RemoteConfig) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(|e| Error::GenerationError(format!("Failed to create HTTP client: {}", e)))
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize, Debug)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug, Default)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with all its parts joined.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Client for the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let api_key = config
            .gemini_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::GenerationError("GEMINI_API_KEY is not set".to_string()))?;

        Ok(Self {
            http: http_client(config)?,
            url: generate_url(&config.gemini_endpoint, &config.gemini_model),
            api_key,
        })
    }
}

fn generate_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model
    )
}

impl TextGenerator for GeminiClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        log::debug!("POST {}", self.url);
        let response = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| Error::GenerationError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(Error::GenerationError(format!(
                "Service returned {}: {}",
                status, message
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| Error::ResponseFormat(format!("Unreadable response body: {}", e)))?;
        parsed
            .into_text()
            .ok_or_else(|| Error::ResponseFormat("Response contained no text".to_string()))
    }
}

/// Fetches QR code PNGs from an HTTP image service.
#[derive(Debug, Clone)]
pub struct HttpQrRenderer {
    http: Client,
    endpoint: String,
}

impl HttpQrRenderer {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        Ok(Self {
            http: http_client(config).map_err(|e| Error::QrError(e.to_string()))?,
            endpoint: config.qr_endpoint.clone(),
        })
    }
}

impl QrRenderer for HttpQrRenderer {
    fn render(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("size", QR_SIZE), ("data", url)])
            .send()
            .map_err(|e| Error::QrError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::QrError(format!("Service returned {}", status)));
        }

        let bytes = response
            .bytes()
            .map_err(|e| Error::QrError(format!("Failed to read image: {}", e)))?;
        log::debug!("Fetched {} byte QR image for {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
