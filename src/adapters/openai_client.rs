//! Model client for the OpenAI Responses API using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::configuration::app_config::ENV_API_KEY;
use crate::domain::{ApiKey, AppError, ModelApiConfig, PromptRequest};
use crate::ports::{ModelClient, ModelClientFactory};

const DEFAULT_STATUS_MESSAGE: &str = "Model API request failed";

/// HTTP transport for the Responses API.
///
/// One request per call; nothing is retried.
#[derive(Clone)]
pub struct HttpModelClient {
    api_key: ApiKey,
    api_url: Url,
    model: String,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for HttpModelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpModelClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpModelClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: ApiKey, config: &ModelApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::ModelApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(self.api_key.expose())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::ModelApiError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::ModelApiError {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            return Ok(api_response.output_text());
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::ModelApiError { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    temperature: f32,
    input: Vec<InputMessage<'a>>,
    text: TextOptions,
}

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    InputText { text: &'a str },
    InputImage { image_url: &'a str },
}

#[derive(Debug, Serialize)]
struct TextOptions {
    format: TextFormat,
}

#[derive(Debug, Serialize)]
struct TextFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ApiResponse {
    /// Concatenated `output_text` parts of all message items.
    ///
    /// Empty when the model produced no text, e.g. a refusal.
    fn output_text(self) -> String {
        if let Some(text) = self.output_text {
            return text;
        }

        self.output
            .into_iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content)
            .filter(|content| content.kind == "output_text")
            .filter_map(|content| content.text)
            .collect()
    }
}

impl<'a> ApiRequest<'a> {
    fn new(model: &'a str, temperature: f32, request: &'a PromptRequest) -> Self {
        let mut content = vec![ContentPart::InputText { text: &request.prompt }];
        content.extend(
            request.images.iter().map(|url| ContentPart::InputImage { image_url: url.as_str() }),
        );

        Self {
            model,
            temperature,
            input: vec![InputMessage { role: "user", content }],
            text: TextOptions { format: TextFormat { kind: "json_object" } },
        }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl ModelClient for HttpModelClient {
    fn analyze(&self, request: &PromptRequest) -> Result<String, AppError> {
        tracing::debug!(
            model = %self.model,
            images = request.images.len(),
            prompt_chars = request.prompt.len(),
            "sending model request"
        );
        self.send_request(&ApiRequest::new(&self.model, self.temperature, request))
    }
}

/// Creates [`HttpModelClient`]s from configuration, requiring the API key
/// only at creation time.
#[derive(Debug, Clone)]
pub struct HttpModelClientFactory {
    config: ModelApiConfig,
    api_key: Option<ApiKey>,
}

impl HttpModelClientFactory {
    pub fn new(config: ModelApiConfig, api_key: Option<ApiKey>) -> Self {
        Self { config, api_key }
    }
}

impl ModelClientFactory for HttpModelClientFactory {
    fn create(&self) -> Result<Box<dyn ModelClient>, AppError> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| AppError::EnvironmentVariableMissing(ENV_API_KEY.into()))?;
        Ok(Box::new(HttpModelClient::new(api_key, &self.config)?))
    }
}
