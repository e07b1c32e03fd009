use super::types::ErrorResponse;
use crate::{
    coach::{CoachService, GenerateRequest, GenerationResult},
    Error,
};
use axum::{extract::State, http::StatusCode, response::Html, response::Json};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub coach: Arc<CoachService>,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerationResult>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "Received generate request: goal={} tone={} chars={}",
        request.goal,
        request.tone,
        request.conversation.chars().count()
    );

    match state.coach.generate(request).await {
        Ok(result) => {
            info!(
                "Generated {} replies ({})",
                result.replies.len(),
                result.classification.as_str()
            );
            Ok(Json(result))
        }
        Err(e) => Err(error_response(e)),
    }
}

/// The single-screen form the server ships to browsers.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = err.status();
    if status.is_server_error() {
        error!("Generate request failed: {}", err);
    } else {
        warn!("Generate request rejected: {}", err);
    }

    let body = match err {
        Error::InvalidInput(msg) | Error::Config(msg) | Error::Llm(msg) => ErrorResponse::new(msg),
        Error::UpstreamFormat { raw } => {
            ErrorResponse::new("model did not return valid JSON").with_raw(raw.into())
        }
        Error::UpstreamShape { payload } => {
            ErrorResponse::new("bad JSON shape from model").with_raw(payload)
        }
        Error::Timeout { seconds } => {
            ErrorResponse::new(format!("model request timed out after {}s", seconds))
        }
        other => ErrorResponse::new("Server error").with_detail(other.to_string()),
    };

    (status, Json(body))
}
