//! Plain HTTP handlers: contact popup fragment and greeting.

use actix_web::{http::StatusCode, web, HttpResponse};
use log::error;
use serde_json::json;

use crate::server::state::AppState;
use crate::server::ws_error::http_error_response;
use crate::site::greeting::current_greeting;
use crate::site::popup::{load_fragment, PopupError};

/// Serve the contact popup fragment for insertion into the page.
pub async fn contact_popup(data: web::Data<AppState>) -> HttpResponse {
    match load_fragment(&data.partials_dir).await {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            error!("[Popup] Error loading contact popup: {}", e);
            let status = match e {
                PopupError::NotFound(_) => StatusCode::NOT_FOUND,
                PopupError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };
            http_error_response(e.code(), "Contact popup is unavailable", None, status)
        }
    }
}

pub async fn greeting() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "greeting": current_greeting() }))
}
