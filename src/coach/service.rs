use super::prompt::build_prompt;
use super::types::{Classification, GenerateRequest, GenerationResult, Goal, Tone};
use crate::{
    config::LlmConfig,
    llm::{GenerateClient, GenerateOptions, OpenAiClient},
    Error, Result,
};
use tracing::{debug, warn};

/// Stateless generation pipeline: validate, classify, prompt, call the model,
/// verify the response shape. One outbound call per invocation.
pub struct CoachService {
    llm: Box<dyn GenerateClient>,
    config: LlmConfig,
}

impl CoachService {
    pub fn new(config: LlmConfig) -> Self {
        let llm = Box::new(OpenAiClient::new(config.clone()));
        Self { llm, config }
    }

    /// Substitute the generation backend, for tests and alternate providers.
    pub fn with_client(config: LlmConfig, llm: Box<dyn GenerateClient>) -> Self {
        Self { llm, config }
    }

    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerationResult> {
        let goal = Goal::parse(&request.goal)?;
        let tone = Tone::parse(&request.tone)?;

        if request.conversation.trim().is_empty() {
            return Err(Error::invalid_input("Conversation is required"));
        }

        if self.config.api_key.is_empty() {
            return Err(Error::config(
                "Missing LLM API key: set llm.api_key in config.yaml or LLM_API_KEY",
            ));
        }

        let classification = Classification::from_length(&request.conversation);
        debug!(
            "Generating replies: goal={} tone={} classification={}",
            goal,
            tone,
            classification.as_str()
        );

        let prompt = build_prompt(goal, tone, &request.conversation, classification);
        let options = GenerateOptions {
            temperature: self.config.temperature,
            json: true,
        };
        let text = self.llm.generate(&prompt, options).await?;

        let payload: serde_json::Value = match serde_json::from_str(text.trim()) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Model returned non-JSON text: {}", e);
                return Err(Error::UpstreamFormat { raw: text });
            }
        };

        let reply_count = payload
            .get("replies")
            .and_then(|replies| replies.as_array())
            .map(|replies| replies.len());
        if reply_count != Some(3) {
            warn!("Model returned unexpected shape: replies={:?}", reply_count);
            return Err(Error::UpstreamShape { payload });
        }

        serde_json::from_value(payload.clone()).map_err(|e| {
            warn!("Model response did not decode: {}", e);
            Error::UpstreamShape { payload }
        })
    }
}
