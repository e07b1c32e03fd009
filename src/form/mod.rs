mod controller;
mod http;

pub use controller::{FormController, FormSnapshot, FormState, ReplyPanel};
pub use http::HttpBackend;

use crate::coach::{GenerateRequest, GenerationResult};
use crate::Result;
use async_trait::async_trait;

/// Capability the form controller sends generate actions through. The server
/// sits behind it in production; tests substitute a recording mock.
#[async_trait]
pub trait CoachBackend: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResult>;
}
