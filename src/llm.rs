//! Blocking client for OpenAI-compatible chat-completion endpoints.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{LlmParameters, LlmSection};
use crate::error::{FnuxError, Result};
use crate::prompt::build_prompt;
use crate::types::MedicalData;

/// User agent string identifying this tool.
const USER_AGENT: &str = concat!("fnux-extractor/", env!("CARGO_PKG_VERSION"));

/// Maximum number of attempts for transient failures.
const MAX_ATTEMPTS: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// A chat request: system instruction plus the rendered user prompt.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub system: String,
    pub user: String,
}

/// Client interface for producing a summary, mockable in tests.
pub trait SummaryClient {
    fn complete(&self, request: &SummaryRequest) -> Result<String>;
}

/// Render the prompt from extracted data and request a summary.
pub fn generate_summary<C: SummaryClient>(
    client: &C,
    config: &LlmSection,
    data: &MedicalData,
) -> Result<String> {
    let request = SummaryRequest {
        system: config.prompt.system_message.clone(),
        user: build_prompt(data, &config.prompt.format_instructions),
    };
    client.complete(&request)
}

/// OpenAI-compatible chat-completions client.
///
/// NOTE: Do NOT derive `Debug` on this struct — `api_key` would be exposed.
/// If Debug is needed, implement it manually with the key redacted.
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    parameters: LlmParameters,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiClient {
    /// Create a client from a validated configuration section.
    pub fn new(config: &LlmSection) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.parameters.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            parameters: config.parameters.clone(),
        })
    }
}

impl SummaryClient for OpenAiClient {
    fn complete(&self, request: &SummaryRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: self.parameters.temperature,
            max_tokens: self.parameters.max_tokens,
        };

        let mut last_error: Option<FnuxError> = None;
        let mut next_delay = Duration::ZERO;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                debug!(attempt, "retrying LLM request after {:?}", next_delay);
                thread::sleep(next_delay);
            }
            // Exponential backoff: 500ms, 1000ms
            next_delay = Duration::from_millis(RETRY_BASE_DELAY_MS * (1 << attempt));

            let resp = match self
                .http
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
            {
                Ok(r) => r,
                Err(e) => {
                    // Retry on connection/timeout errors; fail fast otherwise
                    if e.is_connect() || e.is_timeout() {
                        warn!(attempt, error = %e, "LLM request failed, will retry");
                        last_error = Some(FnuxError::LlmRequest(e));
                        continue;
                    }
                    return Err(FnuxError::LlmRequest(e));
                }
            };

            let status = resp.status().as_u16();

            if status == 429 {
                let retry_after = resp
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(30);
                warn!(attempt, retry_after, "LLM rate limited");
                // Honor the server-provided delay, at least as long as the base delay
                next_delay = Duration::from_secs(retry_after).max(next_delay);
                last_error = Some(FnuxError::LlmApi {
                    status,
                    message: "rate limited".to_string(),
                });
                continue;
            }

            if status >= 500 {
                let message = resp.text().unwrap_or_default();
                warn!(attempt, status, "LLM server error, will retry");
                last_error = Some(FnuxError::LlmApi { status, message });
                continue;
            }

            if status != 200 {
                let body_text = resp.text().unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorResponse>(&body_text)
                    .ok()
                    .and_then(|r| r.error)
                    .map(|e| e.message)
                    .unwrap_or(body_text);
                return Err(FnuxError::LlmApi { status, message });
            }

            let api_response: ChatResponse = resp.json().map_err(FnuxError::LlmRequest)?;
            let content = api_response
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .unwrap_or_default();

            if content.trim().is_empty() {
                warn!(attempt, "LLM returned empty response");
                last_error = Some(FnuxError::LlmEmptyResponse);
                continue;
            }

            return Ok(content);
        }

        Err(FnuxError::RetriesExhausted {
            attempts: MAX_ATTEMPTS,
            message: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown error".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PromptConfig;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_section(base_url: &str) -> LlmSection {
        LlmSection {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            parameters: LlmParameters {
                temperature: 0.2,
                max_tokens: 256,
                timeout_secs: 5,
            },
            prompt: PromptConfig::default(),
        }
    }

    /// Run a blocking completion on a plain OS thread so the blocking
    /// reqwest client never runs inside the async test runtime.
    fn complete_on_thread(section: LlmSection) -> Result<String> {
        std::thread::spawn(move || {
            let client = OpenAiClient::new(&section)?;
            client.complete(&SummaryRequest {
                system: "system".to_string(),
                user: "user".to_string(),
            })
        })
        .join()
        .unwrap_or_else(|_| Err(FnuxError::LlmEmptyResponse))
    }

    #[tokio::test]
    async fn test_complete_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "test-model",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "Resume"}}]
            })))
            .mount(&server)
            .await;

        let section = test_section(&format!("{}/v1", server.uri()));
        let result = complete_on_thread(section);
        assert_eq!(result.unwrap(), "Resume");
    }

    #[tokio::test]
    async fn test_complete_client_error_no_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"message": "invalid api key"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let section = test_section(&format!("{}/v1", server.uri()));
        let err = complete_on_thread(section).unwrap_err();
        match err {
            FnuxError::LlmApi { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_complete_rate_limited_honors_retry_after() {
        let server = MockServer::start().await;
        // First call is rate limited with a one-second delay; the retry
        // must wait at least that long before succeeding.
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "1"))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "Resume"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let section = test_section(&format!("{}/v1", server.uri()));
        let started = std::time::Instant::now();
        let result = complete_on_thread(section);
        assert_eq!(result.unwrap(), "Resume");
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_complete_connection_error_retries_until_exhausted() {
        // Nothing listens on this address; every attempt fails to connect.
        let section = test_section("http://127.0.0.1:9/v1");
        let err = complete_on_thread(section).unwrap_err();
        assert!(matches!(err, FnuxError::RetriesExhausted { attempts: 3, .. }));
    }

    #[tokio::test]
    async fn test_complete_server_error_retries_until_exhausted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let section = test_section(&format!("{}/v1", server.uri()));
        let err = complete_on_thread(section).unwrap_err();
        assert!(matches!(err, FnuxError::RetriesExhausted { attempts: 3, .. }));
    }

    #[tokio::test]
    async fn test_complete_empty_content_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": ""}}]
            })))
            .mount(&server)
            .await;

        let section = test_section(&format!("{}/v1", server.uri()));
        let err = complete_on_thread(section).unwrap_err();
        assert!(matches!(err, FnuxError::RetriesExhausted { .. }));
    }

    struct MockClient {
        response: String,
    }

    impl SummaryClient for MockClient {
        fn complete(&self, request: &SummaryRequest) -> Result<String> {
            assert!(request.user.contains("### Cave-informationer:"));
            Ok(self.response.clone())
        }
    }

    #[test]
    fn test_generate_summary_builds_prompt() {
        let client = MockClient {
            response: "Kort resume.".to_string(),
        };
        let section = test_section("https://llm.example.test/v1");
        let summary = generate_summary(&client, &section, &MedicalData::default()).unwrap();
        assert_eq!(summary, "Kort resume.");
    }
}
