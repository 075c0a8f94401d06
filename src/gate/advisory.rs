//! Live per-field advisories.
//!
//! Re-runs the format and length checks for one field as the visitor types. Advisories are
//! hints only: they never block a submission and never touch session state.

use serde::Serialize;

use crate::config::gate::GateConfig;
use crate::gate::checks::{check_email, check_message, check_name, field_length};
use crate::gate::types::{BlockReason, Field};

/// Result of checking one field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub field: Field,
    /// Length of the checked value in UTF-16 code units.
    pub length: usize,
    pub issue: Option<BlockReason>,
}

impl Advisory {
    #[cfg(test)]
    pub fn is_clear(&self) -> bool {
        self.issue.is_none()
    }
}

/// Check the current value of `field`. Empty values are always clear.
pub fn advise(field: Field, value: &str, config: &GateConfig) -> Advisory {
    let length = field_length(value);
    let issue = if length == 0 {
        None
    } else {
        match field {
            Field::Name => check_name(value, config).err(),
            Field::Email => check_email(value).err().map(BlockReason::InvalidEmail),
            Field::Message => check_message(value, config).err(),
        }
    };
    Advisory { field, length, issue }
}
