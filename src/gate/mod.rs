//! Contact form gate.
//!
//! Spam filtering and validation for contact form submissions, independent of any
//! transport. The form host owns a `SessionState` and passes it to `evaluate_submission`
//! on every submit; `feedback` turns the result into display instructions.

pub mod types;
pub mod checks;
pub mod advisory;
pub mod feedback;

pub use types::{BlockReason, Decision, Field, SessionState, SubmissionInput};
pub use checks::evaluate_submission;
pub use advisory::advise;
pub use feedback::{advisory_feedback, submission_feedback, HostFeedback};
