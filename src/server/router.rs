//! HTTP and WebSocket routing configuration.
//!
//! WebSocket endpoints are each handled by a dedicated session actor; the fragment and
//! greeting endpoints are plain handlers.

use actix_web::web;
use crate::server::contact::session::ws_contact;
use crate::server::animation::session::ws_animation;
use crate::server::clock_session::ws_clock;
use crate::server::pages::{contact_popup, greeting};

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ws/contact").to(ws_contact))
        .service(web::resource("/ws/clock").to(ws_clock))
        .service(web::resource("/ws/animation").to(ws_animation))
        .service(web::resource("/partials/contact-popup.html").route(web::get().to(contact_popup)))
        .service(web::resource("/api/greeting").route(web::get().to(greeting)));
}
