use std::time::Instant;
use serde::{Serialize, Deserialize};

/// Contact form fields that can carry an inline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

/// Raw field values of one submission attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionInput {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Value of the hidden `_honey` field. Humans leave it empty.
    #[serde(default)]
    pub honeypot: String,
}

/// Per-session gate state, owned by the form host.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Instants of recent attempts that passed the rate-limit check.
    pub history: Vec<Instant>,
    /// When the form became interactive.
    pub started_at: Option<Instant>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose form became interactive at `started_at`.
    #[cfg(test)]
    pub fn started(started_at: Instant) -> Self {
        Self {
            history: Vec::new(),
            started_at: Some(started_at),
        }
    }
}

/// Why an email address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailFault {
    MissingAt,
    Malformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockReason {
    HoneypotFilled,
    RateLimited,
    TooFast,
    SpamKeyword,
    InvalidEmail(EmailFault),
    NameTooShort,
    NameTooLong,
    MessageTooShort,
    MessageTooLong,
}

impl BlockReason {
    /// Field the reason should be displayed next to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            BlockReason::HoneypotFilled | BlockReason::RateLimited | BlockReason::TooFast => None,
            BlockReason::SpamKeyword
            | BlockReason::MessageTooShort
            | BlockReason::MessageTooLong => Some(Field::Message),
            BlockReason::InvalidEmail(_) => Some(Field::Email),
            BlockReason::NameTooShort | BlockReason::NameTooLong => Some(Field::Name),
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            BlockReason::HoneypotFilled => "honeypot-filled",
            BlockReason::RateLimited => "rate-limited",
            BlockReason::TooFast => "too-fast",
            BlockReason::SpamKeyword => "spam-keyword",
            BlockReason::InvalidEmail(_) => "invalid-email",
            BlockReason::NameTooShort => "name-too-short",
            BlockReason::NameTooLong => "name-too-long",
            BlockReason::MessageTooShort => "message-too-short",
            BlockReason::MessageTooLong => "message-too-long",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Block(BlockReason),
}
