/// Main configuration module.
/// 
/// Re-exports submodules for the contact gate, clock, animation and server configuration.
pub mod gate;
pub mod clock;
pub mod animation;
pub mod server;
