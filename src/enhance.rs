//! LLM-backed documentation enhancement
//!
//! Talks to an OpenAI-compatible chat-completions endpoint to improve
//! sparse descriptions and to generate usage examples. The enhancer is an
//! explicitly constructed service object; nothing here is process-global.
//! Every individual completion failure is soft: the original text stays
//! and a warning is logged.

use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;
use tracing::{debug, warn};

use crate::error::{DocsmithError, Result};
use crate::prompts;
use crate::schema::{ExampleDoc, PackageDoc};
use crate::utils::truncate_with_ellipsis;

/// Descriptions shorter than this are considered sparse and enhanced
pub const MIN_DESCRIPTION_LEN: usize = 20;
/// Enhanced descriptions are capped at this many bytes
pub const MAX_DESCRIPTION_LEN: usize = 500;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama3-8b-8192";
const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Client for the enhancement endpoint
pub struct Enhancer {
    client: reqwest::Client,
    runtime: Runtime,
    base_url: String,
    model: String,
    api_key: String,
}

impl Enhancer {
    /// Build an enhancer from `GROQ_API_KEY`, or `None` when the key is
    /// absent and enhancement should be skipped
    pub fn from_env() -> Result<Option<Enhancer>> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(Some(Enhancer::new(key)?)),
            _ => Ok(None),
        }
    }

    /// Build an enhancer against the default endpoint and model
    pub fn new(api_key: String) -> Result<Enhancer> {
        Ok(Enhancer {
            client: reqwest::Client::new(),
            runtime: Runtime::new()?,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key,
        })
    }

    /// Enhance sparse descriptions in place, and generate missing examples
    /// when `generate_examples` is set
    pub fn enhance_package(&self, pkg: &mut PackageDoc, generate_examples: bool) {
        if pkg.description.len() < MIN_DESCRIPTION_LEN {
            let prompt = prompts::package_description(pkg);
            if let Some(text) = self.completed(&prompt, "package description") {
                pkg.description = text;
            }
        }

        for i in 0..pkg.functions.len() {
            if pkg.functions[i].description.len() < MIN_DESCRIPTION_LEN {
                let prompt = prompts::function_description(&pkg.functions[i]);
                if let Some(text) = self.completed(&prompt, "function description") {
                    pkg.functions[i].description = text;
                }
            }
        }

        for i in 0..pkg.types.len() {
            if pkg.types[i].description.len() < MIN_DESCRIPTION_LEN {
                let prompt = prompts::type_description(&pkg.types[i]);
                if let Some(text) = self.completed(&prompt, "type description") {
                    pkg.types[i].description = text;
                }
            }
        }

        if generate_examples {
            self.generate_examples(pkg);
        }
    }

    fn generate_examples(&self, pkg: &mut PackageDoc) {
        if pkg.examples.is_empty() {
            let prompt = prompts::package_example(pkg);
            match self.complete(&prompt) {
                Ok(code) if !code.trim().is_empty() => pkg.examples.push(ExampleDoc {
                    name: "Basic Usage".to_string(),
                    code: code.trim().to_string(),
                    doc: "Basic usage example".to_string(),
                }),
                Ok(_) => {}
                Err(e) => warn!("package example generation failed: {}", e),
            }
        }

        for i in 0..pkg.functions.len() {
            if !pkg.functions[i].examples.is_empty() || !pkg.functions[i].is_exported {
                continue;
            }
            let prompt = prompts::function_example(&pkg.functions[i], &pkg.name);
            match self.complete(&prompt) {
                Ok(code) if !code.trim().is_empty() => {
                    pkg.functions[i].examples.push(code.trim().to_string());
                }
                Ok(_) => {}
                Err(e) => warn!("function example generation failed: {}", e),
            }
        }
    }

    /// Run one completion, returning the trimmed, length-capped text;
    /// failures and empty responses yield `None` and leave the model alone
    fn completed(&self, prompt: &str, what: &str) -> Option<String> {
        match self.complete(prompt) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(truncate_with_ellipsis(text, MAX_DESCRIPTION_LEN))
                }
            }
            Err(e) => {
                warn!("{} enhancement failed: {}", what, e);
                None
            }
        }
    }

    /// Send one chat completion request and return the first choice
    fn complete(&self, prompt: &str) -> Result<String> {
        debug!("requesting completion ({} prompt bytes)", prompt.len());
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        self.runtime.block_on(async {
            let response = self
                .client
                .post(format!("{}/chat/completions", self.base_url))
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await?
                .error_for_status()?;

            let parsed: ChatResponse = response.json().await?;
            parsed
                .choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content)
                .ok_or_else(|| DocsmithError::Enhance {
                    message: "no response choices returned".to_string(),
                })
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
