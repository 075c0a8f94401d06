// Contact form host: WebSocket session owning the gate state for one page session.
pub mod messages;
pub mod session;
