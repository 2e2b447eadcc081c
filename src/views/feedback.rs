use std::fmt;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackKind {
    Error,
    Success,
}

/// A one-line status message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn error(message: impl Into<String>) -> Self {
        Feedback { kind: FeedbackKind::Error, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Feedback { kind: FeedbackKind::Success, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == FeedbackKind::Error
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
