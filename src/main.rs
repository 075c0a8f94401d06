//! Main entry point for the site server.
//!
//! Loads configuration, logs the greeting and launches the HTTP server with WebSocket
//! endpoints for the contact form, live clock and easter-egg animation.

use actix_web::{web, App, HttpServer};
use log::info;

use crate::config::animation::BallPhysics;
use crate::config::gate::GateConfig;
use crate::config::server::ServerConfig;

pub mod config;
mod gate;
mod server;
mod site;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = ServerConfig::from_env();
    info!("[Site] {}", site::greeting::current_greeting());

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(
        GateConfig::default(),
        BallPhysics::default(),
        server_config.partials_dir.clone(),
    ));

    info!(
        "[Site] Listening on {}:{} (partials: {})",
        server_config.host,
        server_config.port,
        server_config.partials_dir.display()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await
}
