//! Page widgets other than the contact gate.
//!
//! Greeting, clock formatting, bouncing ball physics and the contact popup fragment.

pub mod greeting;
pub mod clock;
pub mod ball;
pub mod popup;
