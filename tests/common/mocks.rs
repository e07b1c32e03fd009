use async_trait::async_trait;
use razz_coach::{
    coach::{GenerateRequest, GenerationResult},
    config::LlmConfig,
    form::CoachBackend,
    llm::{GenerateClient, GenerateOptions},
    Error, Result,
};
use std::sync::{Arc, Mutex};

/// Mock generation client for testing the coach pipeline
#[derive(Debug, Default)]
pub struct MockGenerateClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<(String, GenerateOptions)>>>,
    pub error: Option<String>,
}

impl MockGenerateClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: Vec<String>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_calls(&self) -> Vec<(String, GenerateOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerateClient for MockGenerateClient {
    async fn generate(&self, prompt: &str, options: GenerateOptions) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), options));

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

/// Mock backend for testing the form controller
#[derive(Default)]
pub struct MockBackend {
    pub requests: Arc<Mutex<Vec<GenerateRequest>>>,
    responses: Mutex<Vec<std::result::Result<GenerationResult, String>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, result: GenerationResult) {
        self.responses.lock().unwrap().push(Ok(result));
    }

    pub fn push_err(&self, message: impl Into<String>) {
        self.responses.lock().unwrap().push(Err(message.into()));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CoachBackend for MockBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResult> {
        self.requests.lock().unwrap().push(request.clone());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        responses.remove(0).map_err(Error::llm)
    }
}

// Helper functions for creating test data

pub fn test_llm_config(api_key: &str) -> LlmConfig {
    LlmConfig {
        base_url: String::new(),
        api_key: api_key.to_string(),
        model: "gpt-4o-mini".to_string(),
        temperature: 0.7,
        timeout_secs: 30,
    }
}

pub fn well_formed_reply_json(goal: &str, tone: &str, classification: &str) -> String {
    serde_json::json!({
        "classification": classification,
        "goal": goal,
        "tone": tone,
        "replies": [
            {"text": "haha fair", "why": "keeps it light"},
            {"text": "ok that one got me", "why": "honest without overdoing it"},
            {"text": "lol careful, i might start trying", "why": "warm, slightly open"}
        ],
        "notes": ["match their energy, not their speed"]
    })
    .to_string()
}

pub fn sample_result(goal: &str, tone: &str) -> GenerationResult {
    serde_json::from_str(&well_formed_reply_json(goal, tone, "SIMPLE")).unwrap()
}
