use crate::{config::LlmConfig, Error, Result};
use async_openai::{config::OpenAIConfig, types as openai_types, Client};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Sampling options for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    pub temperature: f32,
    /// Ask the provider for a JSON-formatted response body.
    pub json: bool,
}

/// Opaque text-generation capability: one prompt in, one text out.
#[async_trait]
pub trait GenerateClient: Send + Sync {
    async fn generate(&self, prompt: &str, options: GenerateOptions) -> Result<String>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

#[async_trait]
impl GenerateClient for OpenAiClient {
    async fn generate(&self, prompt: &str, options: GenerateOptions) -> Result<String> {
        debug!(
            "Creating chat completion: model={} temperature={}",
            self.model, options.temperature
        );

        let message = openai_types::ChatCompletionRequestUserMessageArgs::default()
            .content(openai_types::ChatCompletionRequestUserMessageContent::Text(
                prompt.to_string(),
            ))
            .build()
            .map_err(|e| Error::llm(format!("Failed to build user message: {}", e)))?;

        let messages: Vec<openai_types::ChatCompletionRequestMessage> = vec![message.into()];

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .messages(messages)
            .temperature(options.temperature);

        if options.json {
            request_builder.response_format(openai_types::ResponseFormat::JsonObject);
        }

        let request = request_builder.build()?;

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| Error::Timeout {
                seconds: self.timeout.as_secs(),
            })??;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::llm("Model returned no choices"))?;

        choice
            .message
            .content
            .ok_or_else(|| Error::llm("Model returned an empty message"))
    }
}
