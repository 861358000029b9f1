//! Remote model classification over an OpenAI-compatible chat API
//!
//! The model receives a fixed instruction template plus the documentation
//! fragments and must answer with the module JSON array and nothing else.

use crate::classifier::types::{ClassificationResult, Module};
use crate::config::ClassifierConfig;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Why the remote classification path could not produce a result
#[derive(Debug, Error)]
pub enum RemoteUnavailable {
    #[error("no credential configured for the remote classifier")]
    MissingCredential,

    #[error("remote classifier credential is not a valid header value")]
    InvalidCredential,

    #[error("remote classifier request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote classifier returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("remote classifier returned no content")]
    EmptyResponse,

    #[error("remote classifier response is not valid module JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Instructions sent ahead of the documentation content
const INSTRUCTIONS: &str = r#"You are an expert documentation analyst.

TASK:
From the documentation content below:

1. Identify the HIGH-LEVEL PRODUCT MODULES.
2. Identify the SUBMODULES under each module.
3. Write a clear, detailed description for every module and submodule.
4. Use ONLY the provided content.
5. DO NOT invent or assume features.
6. Output MUST be valid JSON ONLY, with no surrounding text.
7. Follow this EXACT JSON format:

[
  {
    "module": "Module Name",
    "Description": "Module description",
    "Submodules": {
      "Submodule Name": "Submodule description"
    }
  }
]

DOCUMENTATION CONTENT:
"#;

/// Builds the prompt from at most `max_fragments` fragments
pub fn build_prompt(fragments: &[String], max_fragments: usize) -> String {
    let evidence = fragments
        .iter()
        .take(max_fragments)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}{}\n", INSTRUCTIONS, evidence)
}

/// Parses the model's answer into a classification result
///
/// The answer must be exactly the module JSON array; anything else is an error.
pub fn parse_response(content: &str) -> Result<ClassificationResult, RemoteUnavailable> {
    let modules: Vec<Module> = serde_json::from_str(content)?;
    Ok(ClassificationResult::new(modules))
}

/// Client for the remote classification model
pub struct RemoteClassifier {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
    max_fragments: usize,
}

impl RemoteClassifier {
    /// Creates a remote classifier
    ///
    /// # Returns
    ///
    /// * `Ok(RemoteClassifier)` - Ready to send requests
    /// * `Err(RemoteUnavailable)` - Empty credential or the HTTP client could not be built
    pub fn new(config: &ClassifierConfig, api_key: String) -> Result<Self, RemoteUnavailable> {
        if api_key.trim().is_empty() {
            return Err(RemoteUnavailable::MissingCredential);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!(
                "{}/chat/completions",
                config.api_base_url.trim_end_matches('/')
            ),
            model: config.model.clone(),
            temperature: config.temperature,
            max_fragments: config.max_fragments,
        })
    }

    /// The chat completions URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Asks the remote model to classify the fragments
    ///
    /// Only the first `max_fragments` fragments are submitted.
    pub async fn classify(
        &self,
        fragments: &[String],
    ) -> Result<ClassificationResult, RemoteUnavailable> {
        let prompt = build_prompt(fragments, self.max_fragments);

        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", self.api_key.trim());
        let auth =
            HeaderValue::from_str(&auth).map_err(|_| RemoteUnavailable::InvalidCredential)?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        tracing::debug!(
            "Sending {} fragments to {} ({})",
            fragments.len().min(self.max_fragments),
            self.endpoint,
            self.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(RemoteUnavailable::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(RemoteUnavailable::EmptyResponse)?;

        parse_response(&content)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}
