// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the HTTP/WebSocket side of the site, including:
//! - Application state and routing
//! - The contact form host (gate state per page session)
//! - Live clock and easter-egg animation sessions
//! - The contact popup fragment and greeting endpoints

pub mod state;
pub mod router;
pub mod contact;
pub mod animation;
pub mod clock_session;
pub mod pages;
pub mod ws_actor_utils;
pub mod ws_error;
