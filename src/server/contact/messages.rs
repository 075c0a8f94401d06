use serde::{Serialize, Deserialize};

use crate::gate::{BlockReason, Field, HostFeedback, SubmissionInput};

// Message client -> serveur
#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    /// A field changed (one per keystroke).
    FieldInput { field: Field, value: String },
    Submit(SubmissionInput),
    Ping,
}

// Message serveur -> client
#[derive(Serialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    Advisory(HostFeedback),
    Blocked {
        reason: BlockReason,
        code: String,
        feedback: HostFeedback,
    },
    Accepted {
        received_at: String,
        feedback: HostFeedback,
    },
}
