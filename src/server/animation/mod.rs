// Easter-egg animation: a WebSocket session driving the bouncing ball.
pub mod messages;
pub mod session;
