//! Submission gate checks.
//!
//! `evaluate_submission` runs the spam filters and field validation in a fixed order and
//! stops at the first failure. Only the rate-limit check touches session state.

use std::sync::LazyLock;
use std::time::Instant;

use log::debug;
use regex::Regex;

use crate::config::gate::GateConfig;
use crate::gate::types::{BlockReason, Decision, EmailFault, SessionState, SubmissionInput};

/// Whitespace as browsers define `\s` in form patterns. Unlike the Unicode `White_Space`
/// property this includes U+FEFF and excludes U+0085.
const BROWSER_SPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{}@]+", BROWSER_SPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("Invalid email regex")
});

impl SessionState {
    /// Call once per attempt that reaches the rate-limit check.
    /// Returns true if the attempt is rate limited; otherwise records `now`.
    pub fn record_attempt(&mut self, now: Instant, config: &GateConfig) -> bool {
        self.history
            .retain(|&t| now.saturating_duration_since(t) < config.rate_limit_window);
        if self.history.len() >= config.rate_limit_max {
            return true;
        }
        self.history.push(now);
        false
    }

    /// Returns true if `now` is closer to the session start than the minimum delay.
    /// Without a recorded start the attempt is never too fast.
    pub fn is_too_fast(&self, now: Instant, config: &GateConfig) -> bool {
        match self.started_at {
            Some(start) => now.saturating_duration_since(start) < config.min_submit_delay,
            None => false,
        }
    }
}

/// Decide whether a submission attempt may proceed.
pub fn evaluate_submission(
    input: &SubmissionInput,
    state: &mut SessionState,
    now: Instant,
    config: &GateConfig,
) -> Decision {
    if !input.honeypot.is_empty() {
        return Decision::Block(BlockReason::HoneypotFilled);
    }
    if state.record_attempt(now, config) {
        return Decision::Block(BlockReason::RateLimited);
    }
    if state.is_too_fast(now, config) {
        return Decision::Block(BlockReason::TooFast);
    }
    if contains_spam(&input.message, config) {
        return Decision::Block(BlockReason::SpamKeyword);
    }
    if let Err(fault) = check_email(&input.email) {
        return Decision::Block(BlockReason::InvalidEmail(fault));
    }
    if let Err(reason) = check_name(&input.name, config) {
        return Decision::Block(reason);
    }
    if let Err(reason) = check_message(&input.message, config) {
        return Decision::Block(reason);
    }
    debug!("[Gate] Submission passed all checks (history={})", state.history.len());
    Decision::Allow
}

/// True if the lowercased message contains any lexicon phrase.
pub fn contains_spam(message: &str, config: &GateConfig) -> bool {
    let lower = message.to_lowercase();
    config.spam_words.iter().any(|word| lower.contains(word.as_str()))
}

pub fn check_email(email: &str) -> Result<(), EmailFault> {
    if !email.contains('@') {
        return Err(EmailFault::MissingAt);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailFault::Malformed);
    }
    Ok(())
}

/// Length of a field value in UTF-16 code units, the unit browsers report for inputs.
pub fn field_length(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn check_name(name: &str, config: &GateConfig) -> Result<(), BlockReason> {
    let len = field_length(name);
    if len < config.name_min_chars {
        Err(BlockReason::NameTooShort)
    } else if len > config.name_max_chars {
        Err(BlockReason::NameTooLong)
    } else {
        Ok(())
    }
}

pub fn check_message(message: &str, config: &GateConfig) -> Result<(), BlockReason> {
    let len = field_length(message);
    if len < config.message_min_chars {
        Err(BlockReason::MessageTooShort)
    } else if len > config.message_max_chars {
        Err(BlockReason::MessageTooLong)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// An instant far enough from boot that subtracting minutes cannot underflow.
    fn base_now() -> Instant {
        Instant::now() + Duration::from_secs(3_600)
    }

    fn valid_input() -> SubmissionInput {
        SubmissionInput {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello, I would like a quote for a website.".to_string(),
            honeypot: String::new(),
        }
    }

    /// Session started long enough ago to pass the time-based check at `now`.
    fn settled_session(now: Instant) -> SessionState {
        SessionState::started(now - Duration::from_secs(30))
    }

    #[test]
    fn test_valid_submission_allowed_and_recorded() {
        let config = GateConfig::default();
        let now = base_now();
        let mut state = settled_session(now);
        let decision = evaluate_submission(&valid_input(), &mut state, now, &config);
        assert_eq!(decision, Decision::Allow);
        assert_eq!(state.history, vec![now]);
    }

    #[test]
    fn test_honeypot_wins_over_everything() {
        let config = GateConfig::default();
        let now = base_now();
        let mut state = SessionState::started(now);
        let input = SubmissionInput {
            name: "x".to_string(),
            email: "nope".to_string(),
            message: "buy now".to_string(),
            honeypot: " ".to_string(),
        };
        let decision = evaluate_submission(&input, &mut state, now, &config);
        assert_eq!(decision, Decision::Block(BlockReason::HoneypotFilled));
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_fourth_attempt_in_window_rate_limited() {
        let config = GateConfig::default();
        let now = base_now();
        let mut state = settled_session(now);
        state.history = vec![
            now - Duration::from_millis(50_000),
            now - Duration::from_millis(20_000),
            now - Duration::from_millis(1_000),
        ];
        let decision = evaluate_submission(&valid_input(), &mut state, now, &config);
        assert_eq!(decision, Decision::Block(BlockReason::RateLimited));
        assert_eq!(state.history.len(), 3);
    }

    #[test]
    fn test_aged_history_is_pruned() {
        let config = GateConfig::default();
        let now = base_now();
        let mut state = settled_session(now);
        state.history = vec![
            now - Duration::from_millis(61_000),
            now - Duration::from_millis(60_000),
            now - Duration::from_millis(90_000),
        ];
        let decision = evaluate_submission(&valid_input(), &mut state, now, &config);
        assert_eq!(decision, Decision::Allow);
        assert_eq!(state.history, vec![now]);
    }

    #[test]
    fn test_too_fast_boundary() {
        let config = GateConfig::default();
        let start = base_now();
        let mut state = SessionState::started(start);

        let early = start + Duration::from_millis(1_999);
        let decision = evaluate_submission(&valid_input(), &mut state, early, &config);
        assert_eq!(decision, Decision::Block(BlockReason::TooFast));

        let on_time = start + Duration::from_millis(2_000);
        let decision = evaluate_submission(&valid_input(), &mut state, on_time, &config);
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn test_no_session_start_never_too_fast() {
        let config = GateConfig::default();
        let mut state = SessionState::new();
        let decision = evaluate_submission(&valid_input(), &mut state, base_now(), &config);
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn test_spam_keyword_blocks_and_consumes_slot() {
        let config = GateConfig::default();
        let now = base_now();
        let mut state = settled_session(now);
        let input = SubmissionInput { message: "Buy now and win a prize!".to_string(), ..valid_input() };
        let decision = evaluate_submission(&input, &mut state, now, &config);
        assert_eq!(decision, Decision::Block(BlockReason::SpamKeyword));
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_spam_match_is_substring() {
        let config = GateConfig::default();
        assert!(contains_spam("Our SUBSCRIBERS love it", &config));
        assert!(!contains_spam("Just a normal question", &config));
    }

    #[test]
    fn test_email_faults() {
        assert_eq!(check_email("user.example.com"), Err(EmailFault::MissingAt));
        assert_eq!(check_email("user@@example"), Err(EmailFault::Malformed));
        assert_eq!(check_email("user@example"), Err(EmailFault::Malformed));
        assert_eq!(check_email("us er@example.com"), Err(EmailFault::Malformed));
        assert_eq!(check_email("user@example.com"), Ok(()));
        assert_eq!(check_email("a@b.c.d"), Ok(()));
    }

    #[test]
    fn test_email_whitespace_matches_browser_set() {
        assert_eq!(check_email("a\u{FEFF}b@c.de"), Err(EmailFault::Malformed));
        assert_eq!(check_email("a@c\u{3000}x.de"), Err(EmailFault::Malformed));
        assert_eq!(check_email("a\u{0085}b@c.de"), Ok(()));
    }

    #[test]
    fn test_invalid_email_decision() {
        let config = GateConfig::default();
        let now = base_now();
        let mut state = settled_session(now);
        let input = SubmissionInput { email: "user@@example".to_string(), ..valid_input() };
        let decision = evaluate_submission(&input, &mut state, now, &config);
        assert_eq!(decision, Decision::Block(BlockReason::InvalidEmail(EmailFault::Malformed)));
    }

    #[test]
    fn test_name_length_bounds() {
        let config = GateConfig::default();
        assert_eq!(check_name("A", &config), Err(BlockReason::NameTooShort));
        assert_eq!(check_name(&"a".repeat(100), &config), Ok(()));
        assert_eq!(check_name(&"a".repeat(101), &config), Err(BlockReason::NameTooLong));
        // Untrimmed: two spaces count as two characters.
        assert_eq!(check_name("  ", &config), Ok(()));
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        let config = GateConfig::default();
        assert_eq!(field_length("😀"), 2);
        assert_eq!(check_name("😀", &config), Ok(()));
        assert_eq!(check_name(&"😀".repeat(51), &config), Err(BlockReason::NameTooLong));
        assert_eq!(check_message(&"😀".repeat(5), &config), Ok(()));
        assert_eq!(check_message(&"😀".repeat(500), &config), Ok(()));
        assert_eq!(check_message(&"😀".repeat(501), &config), Err(BlockReason::MessageTooLong));
    }

    #[test]
    fn test_message_length_bounds() {
        let config = GateConfig::default();
        assert_eq!(check_message("too short", &config), Err(BlockReason::MessageTooShort));
        assert_eq!(check_message("just right", &config), Ok(()));
        assert_eq!(check_message(&"m".repeat(1_000), &config), Ok(()));
        assert_eq!(check_message(&"m".repeat(1_001), &config), Err(BlockReason::MessageTooLong));
    }

    #[test]
    fn test_checks_run_in_order() {
        let config = GateConfig::default();
        let now = base_now();
        let mut state = settled_session(now);
        // Bad email and bad name: email is checked first.
        let input = SubmissionInput {
            name: "A".to_string(),
            email: "nope".to_string(),
            ..valid_input()
        };
        let decision = evaluate_submission(&input, &mut state, now, &config);
        assert_eq!(decision, Decision::Block(BlockReason::InvalidEmail(EmailFault::MissingAt)));
    }

    #[test]
    fn test_injected_config() {
        let config = GateConfig::default()
            .with_spam_words(["Crypto"])
            .with_rate_limit(1, Duration::from_secs(5))
            .with_min_submit_delay(Duration::ZERO);
        let now = base_now();
        let mut state = SessionState::started(now);

        let input = SubmissionInput { message: "buy now, it is great".to_string(), ..valid_input() };
        assert_eq!(evaluate_submission(&input, &mut state, now, &config), Decision::Allow);

        let later = now + Duration::from_secs(1);
        let decision = evaluate_submission(&valid_input(), &mut state, later, &config);
        assert_eq!(decision, Decision::Block(BlockReason::RateLimited));

        let input = SubmissionInput { message: "cheap CRYPTO offers".to_string(), ..valid_input() };
        let much_later = now + Duration::from_secs(6);
        let decision = evaluate_submission(&input, &mut state, much_later, &config);
        assert_eq!(decision, Decision::Block(BlockReason::SpamKeyword));
    }
}
