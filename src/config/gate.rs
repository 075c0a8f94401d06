/// Contact form gate configuration.
///
/// Default spam-filter policy and field length bounds. `GateConfig` bundles these values
/// so that hosts and tests can inject their own thresholds.
use std::time::Duration;

/// Maximum number of submissions accepted in a rolling window.
pub const RATE_LIMIT_MAX_SUBMISSIONS: usize = 3;

/// Length of the rate-limit window in milliseconds.
pub const RATE_LIMIT_WINDOW_MS: u64 = 60_000;

/// Minimum time (in milliseconds) between form start and submission.
pub const MIN_SUBMIT_DELAY_MS: u64 = 2_000;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1_000;

/// Phrases rejected anywhere in a message (lowercase, substring match).
pub const SPAM_WORDS: [&str; 10] = [
    "free money",
    "buy now",
    "click here",
    "subscribe",
    "promo",
    "lottery",
    "winner",
    "congratulations",
    "claim now",
    "limited time",
];

/// Runtime gate policy.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub spam_words: Vec<String>,
    pub rate_limit_max: usize,
    pub rate_limit_window: Duration,
    pub min_submit_delay: Duration,
    pub name_min_chars: usize,
    pub name_max_chars: usize,
    pub message_min_chars: usize,
    pub message_max_chars: usize,
}

impl GateConfig {
    /// Replace the spam lexicon. Phrases are stored lowercase.
    pub fn with_spam_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.spam_words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    pub fn with_rate_limit(mut self, max: usize, window: Duration) -> Self {
        self.rate_limit_max = max;
        self.rate_limit_window = window;
        self
    }

    pub fn with_min_submit_delay(mut self, delay: Duration) -> Self {
        self.min_submit_delay = delay;
        self
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            spam_words: SPAM_WORDS.iter().map(|w| w.to_string()).collect(),
            rate_limit_max: RATE_LIMIT_MAX_SUBMISSIONS,
            rate_limit_window: Duration::from_millis(RATE_LIMIT_WINDOW_MS),
            min_submit_delay: Duration::from_millis(MIN_SUBMIT_DELAY_MS),
            name_min_chars: NAME_MIN_CHARS,
            name_max_chars: NAME_MAX_CHARS,
            message_min_chars: MESSAGE_MIN_CHARS,
            message_max_chars: MESSAGE_MAX_CHARS,
        }
    }
}
