//! Local generate-style backend (Ollama `/api/generate`).

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::extract::extract_summary;
use super::prompt::build_prompt;
use super::{Deadline, SummarizeError, Summarizer, Summary, read_success_body};
use crate::config::DEFAULT_LOCAL_MODEL;

const GENERATE_PATH: &str = "/api/generate";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for a single-shot, non-streaming local generate endpoint
#[derive(Debug, Clone)]
pub struct LocalGenerateClient {
    client: Client,
    base_url: String,
}

impl LocalGenerateClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build().context("Failed to build HTTP client")?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_PATH)
    }

    /// `model`, or the local default when it is blank
    pub fn resolve_model(model: &str) -> &str {
        if model.trim().is_empty() { DEFAULT_LOCAL_MODEL } else { model }
    }
}

impl Summarizer for LocalGenerateClient {
    fn name(&self) -> &'static str {
        "local-generate"
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
        let request =
            GenerateRequest { model: Self::resolve_model(model), prompt: &prompt, stream: false };

        let response = self
            .client
            .post(self.endpoint())
            .timeout(remaining)
            .json(&request)
            .send()
            .map_err(|e| SummarizeError::from_transport(e, deadline.budget()))?;
        let body = read_success_body(response, deadline)?;

        let envelope: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| SummarizeError::Decode(e.to_string()))?;

        Ok(extract_summary(&envelope.response)?)
    }
}
