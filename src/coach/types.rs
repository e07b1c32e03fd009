use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Communicative intent the user wants the suggested replies to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Reply,
    Flirty,
    Apology,
    Boundary,
    Reconnect,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::Reply,
        Goal::Flirty,
        Goal::Apology,
        Goal::Boundary,
        Goal::Reconnect,
    ];

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "reply" => Ok(Goal::Reply),
            "flirty" => Ok(Goal::Flirty),
            "apology" => Ok(Goal::Apology),
            "boundary" => Ok(Goal::Boundary),
            "reconnect" => Ok(Goal::Reconnect),
            other => Err(Error::invalid_input(format!("Invalid goal: {}", other))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Reply => "reply",
            Goal::Flirty => "flirty",
            Goal::Apology => "apology",
            Goal::Boundary => "boundary",
            Goal::Reconnect => "reconnect",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stylistic register for the suggested replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Chill,
    Playful,
    Confident,
    Soft,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Chill, Tone::Playful, Tone::Confident, Tone::Soft];

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "chill" => Ok(Tone::Chill),
            "playful" => Ok(Tone::Playful),
            "confident" => Ok(Tone::Confident),
            "soft" => Ok(Tone::Soft),
            other => Err(Error::invalid_input(format!("Invalid tone: {}", other))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Chill => "chill",
            Tone::Playful => "playful",
            Tone::Confident => "confident",
            Tone::Soft => "soft",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length-based steering hint passed to the model. Advisory only; the model
/// may report COMPLEX for a short transcript when the content warrants it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Simple,
    Complex,
}

impl Classification {
    /// Transcripts under 300 characters are SIMPLE, purely by length.
    pub fn from_length(conversation: &str) -> Self {
        if conversation.chars().count() < 300 {
            Classification::Simple
        } else {
            Classification::Complex
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Simple => "SIMPLE",
            Classification::Complex => "COMPLEX",
        }
    }
}

/// Wire request for one generate action. Goal and tone arrive as raw strings
/// so out-of-enumeration values surface as a 400, not a body decode rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub goal: String,
    pub tone: String,
    pub conversation: String,
}

/// One suggested reply plus a short rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyCandidate {
    pub text: String,
    #[serde(default)]
    pub why: String,
}

/// Validated model output relayed to the caller. Goal and tone are echoed
/// verbatim from the request by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub classification: Classification,
    pub goal: String,
    pub tone: String,
    pub replies: Vec<ReplyCandidate>,
    #[serde(default)]
    pub notes: Vec<String>,
}
