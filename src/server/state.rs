// src/server/state.rs

//! Application state for the site server.
//!
//! Holds the configuration shared by every HTTP/WebSocket handler. Per-visitor gate state is
//! not stored here: each contact session owns its own.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::animation::BallPhysics;
use crate::config::gate::GateConfig;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Spam-filter policy handed to each contact session.
    pub gate_config: Arc<GateConfig>,
    pub physics: BallPhysics,
    /// Directory the contact popup fragment is read from.
    pub partials_dir: PathBuf,
}

impl AppState {
    pub fn new(gate_config: GateConfig, physics: BallPhysics, partials_dir: PathBuf) -> Self {
        AppState {
            gate_config: Arc::new(gate_config),
            physics,
            partials_dir,
        }
    }
}
