//! OpenAI-compatible chat completions backend.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use super::extract::extract_summary;
use super::prompt::build_prompt;
use super::{Deadline, SummarizeError, Summarizer, Summary, read_success_body};

const CHAT_PATH: &str = "/v1/chat/completions";
const TEMPERATURE: f64 = 0.2;
const SYSTEM_INSTRUCTION: &str =
    r#"Reply ONLY with a JSON object: {"summary": "...", "keywords": ["..."]}"#;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
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
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

/// Client for a `/v1/chat/completions` endpoint with bearer authorization
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ChatCompletionClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder().build().context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHAT_PATH)
    }

    fn headers(&self) -> Result<HeaderMap, SummarizeError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| SummarizeError::Decode(format!("invalid API key header: {}", e)))?;
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }
}

impl Summarizer for ChatCompletionClient {
    fn name(&self) -> &'static str {
        "chat-completion"
    }

    fn summarize(
        &self,
        deadline: Deadline,
        model: &str,
        filename: &str,
        preview: &str,
    ) -> Result<Summary, SummarizeError> {
        let remaining = deadline.remaining().ok_or(SummarizeError::Timeout(deadline.budget()))?;
        let prompt = build_prompt(filename, preview);
        let request = ChatRequest {
            model,
            messages: [
                ChatMessage { role: "system", content: SYSTEM_INSTRUCTION },
                ChatMessage { role: "user", content: &prompt },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(self.endpoint())
            .headers(self.headers()?)
            .timeout(remaining)
            .json(&request)
            .send()
            .map_err(|e| SummarizeError::from_transport(e, deadline.budget()))?;
        let body = read_success_body(response, deadline)?;

        let envelope: ChatResponse =
            serde_json::from_str(&body).map_err(|e| SummarizeError::Decode(e.to_string()))?;
        let choice = envelope
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SummarizeError::Decode("response contained no choices".to_string()))?;

        Ok(extract_summary(&choice.message.content)?)
    }
}
