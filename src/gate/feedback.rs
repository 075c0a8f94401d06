//! Presentation adapter.
//!
//! Maps gate decisions and advisories to what the form host should display: which inline
//! errors to clear, an optional inline error, and an optional alert.

use serde::Serialize;

use crate::config::gate::GateConfig;
use crate::gate::advisory::Advisory;
use crate::gate::types::{BlockReason, Decision, EmailFault, Field};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub text: String,
}

/// Display instructions for the form host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostFeedback {
    /// Fields whose inline error must be cleared first.
    pub cleared: Vec<Field>,
    pub field_error: Option<FieldError>,
    pub alert: Option<String>,
}

/// Feedback for a submit attempt. All inline errors are cleared before showing the new one.
pub fn submission_feedback(decision: &Decision, config: &GateConfig) -> HostFeedback {
    let cleared = Field::ALL.to_vec();
    match decision {
        Decision::Allow => HostFeedback { cleared, field_error: None, alert: None },
        Decision::Block(reason) => HostFeedback {
            cleared,
            field_error: reason.field().map(|field| FieldError {
                field,
                text: inline_text(reason, config),
            }),
            alert: Some(alert_text(reason, config)),
        },
    }
}

/// Feedback for a live field check. Only the checked field is touched; never alerts.
pub fn advisory_feedback(advisory: &Advisory, config: &GateConfig) -> HostFeedback {
    let field_error = advisory.issue.map(|reason| {
        let text = match reason {
            BlockReason::InvalidEmail(EmailFault::MissingAt) => "Invalid email address".to_string(),
            BlockReason::MessageTooShort => format!(
                "Message must be at least {} characters ({}/{})",
                config.message_min_chars, advisory.length, config.message_min_chars
            ),
            other => inline_text(&other, config),
        };
        FieldError { field: advisory.field, text }
    });
    HostFeedback {
        cleared: vec![advisory.field],
        field_error,
        alert: None,
    }
}

fn inline_text(reason: &BlockReason, config: &GateConfig) -> String {
    match reason {
        BlockReason::SpamKeyword => "Your message contains blocked spam keywords.".to_string(),
        BlockReason::InvalidEmail(EmailFault::MissingAt) => "Enter a valid email".to_string(),
        BlockReason::InvalidEmail(EmailFault::Malformed) => {
            "Please enter a valid email address".to_string()
        }
        BlockReason::NameTooShort => {
            format!("Name must be at least {} characters", config.name_min_chars)
        }
        BlockReason::NameTooLong => {
            format!("Name must not exceed {} characters", config.name_max_chars)
        }
        BlockReason::MessageTooShort => {
            format!("Message must be at least {} characters", config.message_min_chars)
        }
        BlockReason::MessageTooLong => {
            format!("Message must not exceed {} characters", config.message_max_chars)
        }
        // No inline slot; these only alert.
        BlockReason::HoneypotFilled | BlockReason::RateLimited | BlockReason::TooFast => {
            alert_text(reason, config)
        }
    }
}

fn alert_text(reason: &BlockReason, config: &GateConfig) -> String {
    match reason {
        BlockReason::HoneypotFilled => "Spam detected. Form submission blocked.".to_string(),
        BlockReason::RateLimited => {
            "Too many submissions. Please wait a minute before trying again.".to_string()
        }
        BlockReason::TooFast => {
            "Submission was too fast. Please take your time to fill out the form.".to_string()
        }
        BlockReason::SpamKeyword => {
            "Your message contains blocked spam keywords. Please revise your message.".to_string()
        }
        BlockReason::InvalidEmail(EmailFault::MissingAt) => "Enter a valid email address.".to_string(),
        BlockReason::InvalidEmail(EmailFault::Malformed) => {
            "Please enter a valid email address.".to_string()
        }
        BlockReason::NameTooShort => {
            format!("Name must be at least {} characters.", config.name_min_chars)
        }
        BlockReason::NameTooLong => format!(
            "Name is too long. Maximum {} characters allowed.",
            config.name_max_chars
        ),
        BlockReason::MessageTooShort => {
            format!("Message must be at least {} characters.", config.message_min_chars)
        }
        BlockReason::MessageTooLong => format!(
            "Message is too long. Maximum {} characters allowed.",
            config.message_max_chars
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::advisory::advise;

    #[test]
    fn test_allow_only_clears() {
        let feedback = submission_feedback(&Decision::Allow, &GateConfig::default());
        assert_eq!(feedback.cleared, Field::ALL.to_vec());
        assert!(feedback.field_error.is_none());
        assert!(feedback.alert.is_none());
    }

    #[test]
    fn test_honeypot_alerts_without_inline_error() {
        let decision = Decision::Block(BlockReason::HoneypotFilled);
        let feedback = submission_feedback(&decision, &GateConfig::default());
        assert!(feedback.field_error.is_none());
        assert_eq!(feedback.alert.as_deref(), Some("Spam detected. Form submission blocked."));
    }

    #[test]
    fn test_name_too_long_texts() {
        let decision = Decision::Block(BlockReason::NameTooLong);
        let feedback = submission_feedback(&decision, &GateConfig::default());
        assert_eq!(
            feedback.field_error,
            Some(FieldError {
                field: Field::Name,
                text: "Name must not exceed 100 characters".to_string(),
            })
        );
        assert_eq!(
            feedback.alert.as_deref(),
            Some("Name is too long. Maximum 100 characters allowed.")
        );
    }

    #[test]
    fn test_advisory_message_counter() {
        let config = GateConfig::default();
        let feedback = advisory_feedback(&advise(Field::Message, "hi there", &config), &config);
        assert_eq!(feedback.cleared, vec![Field::Message]);
        assert_eq!(
            feedback.field_error.map(|e| e.text),
            Some("Message must be at least 10 characters (8/10)".to_string())
        );
        assert!(feedback.alert.is_none());
    }

    #[test]
    fn test_advisory_email_missing_at_text() {
        let config = GateConfig::default();
        let feedback = advisory_feedback(&advise(Field::Email, "someone", &config), &config);
        assert_eq!(feedback.field_error.map(|e| e.text), Some("Invalid email address".to_string()));
    }
}
