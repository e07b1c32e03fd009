use super::CoachBackend;
use crate::coach::{GenerateRequest, GenerationResult};
use crate::server::ErrorResponse;
use crate::{Error, Result};
use async_trait::async_trait;

/// `CoachBackend` over the server's `/api/generate` endpoint. Non-success
/// bodies are reduced to the single string the form displays.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CoachBackend for HttpBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResult> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.json().await?);
        }

        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) if !body.error.is_empty() => body.error,
            Ok(body) => body
                .detail
                .unwrap_or_else(|| "something went wrong.".to_string()),
            Err(_) => format!("request failed with status {}", status),
        };

        Err(Error::llm(message))
    }
}
