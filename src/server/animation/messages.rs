use serde::{Serialize, Deserialize};

use crate::site::ball::{Frame, Viewport};

#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    /// Logo clicked.
    Start,
    /// Close button clicked.
    Stop,
    Resize(Viewport),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    Started,
    Frame(Frame),
    Stopped,
}

/// Optional viewport size in the connection query string.
#[derive(Deserialize, Debug, Default)]
pub struct ViewportQuery {
    pub width: Option<f64>,
    pub height: Option<f64>,
}
