use std::time::Duration;

use salescript_core::{env_parse_with_default, env_string};

use crate::ai_types::{ChatRequest, ChatResponse};
use crate::error::LlmError;

/// Default LLM model to use.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const RETRY_DELAYS: [u64; 4] = [0, 1, 2, 4];

/// Connection settings for the completion service.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    /// Extra attempts after a transient failure. `0` means exactly one call.
    pub max_retries: usize,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl LlmConfig {
    #[must_use]
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            model: DEFAULT_MODEL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: 0,
        }
    }

    /// Read settings from `SALESCRIPT_*` variables.
    ///
    /// # Errors
    /// Returns [`LlmError::ClientInit`] when no API key is configured.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = env_string("SALESCRIPT_API_KEY")
            .or_else(|| env_string("OPENAI_API_KEY"))
            .ok_or_else(|| {
                LlmError::ClientInit(
                    "SALESCRIPT_API_KEY or OPENAI_API_KEY environment variable must be set"
                        .to_owned(),
                )
            })?;
        let base_url =
            env_string("SALESCRIPT_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let mut config = Self::new(api_key, base_url);
        if let Some(model) = env_string("SALESCRIPT_MODEL") {
            config.model = model;
        }
        config.timeout = Duration::from_secs(env_parse_with_default(
            "SALESCRIPT_LLM_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        ));
        config.max_retries = env_parse_with_default("SALESCRIPT_LLM_MAX_RETRIES", 0);
        Ok(config)
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Client for LLM API calls.
pub struct LlmClient {
    pub(crate) client: reqwest::Client,
    pub(crate) config: LlmConfig,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("client", &self.client)
            .field("config", &self.config)
            .finish()
    }
}

impl LlmClient {
    /// Creates a new LLM client from `config`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(mut config: LlmConfig) -> Result<Self, LlmError> {
        config.base_url = config.base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::ClientInit(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Send a chat completion request and return the extracted content string.
    ///
    /// A `null` message content is returned as an empty string.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails or times out, the API
    /// returns a non-success status, the response body cannot be parsed, or
    /// the choices array is empty.
    pub(crate) async fn chat_completion(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let max_retries = self.config.max_retries;
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..=max_retries {
            if attempt > 0 {
                let delay_secs = RETRY_DELAYS.get(attempt).copied().unwrap_or(4);
                let delay = Duration::from_secs(delay_secs);
                tokio::time::sleep(delay).await;
                tracing::warn!("LLM retry attempt {attempt}/{max_retries} after {delay:?}");
            }

            let response_result = self
                .client
                .post(format!("{}/v1/chat/completions", self.config.base_url))
                .header("Authorization", format!("Bearer {}", self.config.api_key))
                .json(request)
                .send()
                .await;

            let response = match response_result {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(self.request_error(e));
                    continue;
                },
            };

            let status = response.status();
            if status.is_success() {
                let body = match response.text().await {
                    Ok(b) => b,
                    Err(e) => {
                        last_error = Some(self.request_error(e));
                        continue;
                    },
                };

                let chat_response: ChatResponse =
                    serde_json::from_str(&body).map_err(|e| LlmError::JsonParse {
                        context: format!(
                            "chat completion response (body: {})",
                            truncate(&body, 200)
                        ),
                        source: e,
                    })?;

                let first_choice =
                    chat_response.choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;

                return Ok(first_choice.message.content.unwrap_or_default());
            }

            let status_code = status.as_u16();
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());

            let err = LlmError::HttpStatus { code: status_code, body };
            if err.is_transient() {
                last_error = Some(err);
                continue;
            }
            return Err(err);
        }

        let last_error = last_error.unwrap_or(LlmError::EmptyResponse);
        if max_retries == 0 {
            return Err(last_error);
        }
        Err(LlmError::RetriesExhausted(Box::new(last_error)))
    }

    fn request_error(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout(self.config.timeout)
        } else {
            LlmError::HttpRequest(err)
        }
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
