use super::CoachBackend;
use crate::coach::{GenerateRequest, GenerationResult, Goal, Tone};
use tracing::debug;

/// Form lifecycle. Loading is entered only after local validation passes and
/// is always left on completion; a failure keeps the prior result around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Single-screen form state: selections, transcript, last outcome and the
/// rationale display toggle. Drives one request per generate action.
pub struct FormController {
    goal: Goal,
    tone: Tone,
    conversation: String,
    result: Option<GenerationResult>,
    error: Option<String>,
    show_why: bool,
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self {
            goal: Goal::Reply,
            tone: Tone::Chill,
            conversation: String::new(),
            result: None,
            error: None,
            show_why: false,
            state: FormState::Idle,
        }
    }

    pub fn set_goal(&mut self, goal: Goal) {
        self.goal = goal;
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub fn set_conversation(&mut self, conversation: impl Into<String>) {
        self.conversation = conversation.into();
    }

    pub fn toggle_show_why(&mut self) {
        self.show_why = !self.show_why;
    }

    pub fn char_count(&self) -> usize {
        self.conversation.chars().count()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FormState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    /// Candidate text for a clipboard action; the host UI copies best-effort.
    pub fn copy_text(&self, index: usize) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|result| result.replies.get(index))
            .map(|reply| reply.text.as_str())
    }

    /// One generate action. An empty transcript sets a local validation error
    /// and performs no request; otherwise the flow is Loading, then Ready or
    /// Failed depending on the backend outcome.
    pub async fn generate(&mut self, backend: &dyn CoachBackend) {
        self.error = None;

        if self.conversation.trim().is_empty() {
            self.error = Some("paste a conversation first.".to_string());
            return;
        }

        self.state = FormState::Loading;
        debug!("Form generating: goal={} tone={}", self.goal, self.tone);

        let request = GenerateRequest {
            goal: self.goal.as_str().to_string(),
            tone: self.tone.as_str().to_string(),
            conversation: self.conversation.clone(),
        };

        match backend.generate(&request).await {
            Ok(result) => {
                self.result = Some(result);
                self.state = FormState::Ready;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.state = FormState::Failed;
            }
        }
    }

    /// View model for the current frame.
    pub fn snapshot(&self) -> FormSnapshot {
        let panels = self
            .result
            .as_ref()
            .map(|result| {
                result
                    .replies
                    .iter()
                    .map(|reply| ReplyPanel {
                        text: reply.text.clone(),
                        why: self.show_why.then(|| reply.why.clone()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        // Only the first note is surfaced.
        let note = self
            .result
            .as_ref()
            .and_then(|result| result.notes.first().cloned());

        FormSnapshot {
            goal: self.goal,
            tone: self.tone,
            char_count: self.char_count(),
            loading: self.is_loading(),
            error: self.error.clone(),
            placeholder: self.result.is_none(),
            panels,
            note,
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub goal: Goal,
    pub tone: Tone,
    pub char_count: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// True when no result exists yet and a placeholder should render.
    pub placeholder: bool,
    pub panels: Vec<ReplyPanel>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyPanel {
    pub text: String,
    /// Present only while the rationale toggle is on.
    pub why: Option<String>,
}
