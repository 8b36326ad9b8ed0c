/// Answer shown when the backend replied 200 but without a usable answer field.
pub const FALLBACK_ANSWER: &str = "No answer returned from backend.";

/// Single user-facing message for every failure mode (unreachable server,
/// non-2xx status, malformed reply). The cause is only logged.
pub const BACKEND_ERROR: &str = "⚠️ Could not connect to backend. Make sure FastAPI is running.";

/// Submission lifecycle. `Error` is a settled state: submitting is allowed
/// from it exactly as from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error,
}

/// All ephemeral UI state of the assistant. Transitions are synchronous
/// methods so they stay testable without the iced runtime.
#[derive(Debug, Clone, Default)]
pub struct AssistantState {
    pub question: String,
    pub answer: String,
    pub error_message: String,
    pub status: Status,
}

impl AssistantState {
    /// Replaces the question verbatim. No validation, no side effects.
    pub fn set_question(&mut self, text: String) {
        self.question = text;
    }

    /// Starts a submission: clears the previous answer/error and enters
    /// `Loading`. Returns `false` without touching state when the question
    /// is blank or a request is already in flight; the caller must not send
    /// anything in that case.
    pub fn begin_submission(&mut self) -> bool {
        if self.question.trim().is_empty() || self.status == Status::Loading {
            return false;
        }
        self.answer.clear();
        self.error_message.clear();
        self.status = Status::Loading;
        true
    }

    /// Settles a successful exchange. A missing or empty answer field falls
    /// back to [`FALLBACK_ANSWER`].
    pub fn apply_answer(&mut self, answer: Option<String>) {
        self.answer = answer
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| FALLBACK_ANSWER.to_string());
        self.error_message.clear();
        self.status = Status::Idle;
    }

    /// Settles a failed exchange with the fixed user-facing message.
    pub fn apply_failure(&mut self) {
        self.error_message = BACKEND_ERROR.to_string();
        self.status = Status::Error;
    }
}
