/// WebSocket session handler for the contact form.
///
/// One session per page: the form becomes interactive when the socket opens, which is when
/// the session start is recorded. The session owns the gate state, so every check for this
/// visitor runs on this actor and needs no locking.
use std::sync::Arc;
use std::time::Instant;

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use chrono::Local;
use log::{info, warn, debug};
use uuid::Uuid;

use super::messages::{ClientWsMessage, ServerWsMessage};
use crate::config::gate::GateConfig;
use crate::gate::{
    advise, advisory_feedback, evaluate_submission, submission_feedback, Decision, SessionState,
    SubmissionInput,
};
use crate::server::ws_actor_utils::WsActorUtils;
use crate::server::ws_error::ws_error_message;

pub struct ContactSession {
    pub session_id: Uuid,
    pub gate: SessionState,
    pub config: Arc<GateConfig>,
}

impl ContactSession {
    pub fn new(config: Arc<GateConfig>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            gate: SessionState::new(),
            config,
        }
    }

    /// Mark the form as interactive. Only the first call has an effect.
    pub fn open_form(&mut self, now: Instant) {
        if self.gate.started_at.is_none() {
            self.gate.started_at = Some(now);
        }
    }

    /// Business handling of a client message; returns the reply to send, if any.
    pub fn handle_client_message(&mut self, msg: ClientWsMessage, now: Instant) -> Option<ServerWsMessage> {
        match msg {
            ClientWsMessage::FieldInput { field, value } => {
                let advisory = advise(field, &value, &self.config);
                Some(ServerWsMessage::Advisory(advisory_feedback(&advisory, &self.config)))
            }
            ClientWsMessage::Submit(input) => Some(self.submit(&input, now)),
            ClientWsMessage::Ping => None,
        }
    }

    /// Parse and handle one text frame. An unparsable frame yields an `INVALID_MESSAGE`
    /// error frame; the session stays open either way.
    pub fn handle_text(&mut self, text: &str, now: Instant) -> Result<Option<ServerWsMessage>, String> {
        match serde_json::from_str::<ClientWsMessage>(text) {
            Ok(client_msg) => Ok(self.handle_client_message(client_msg, now)),
            Err(e) => {
                debug!("[ContactSession] Invalid client message: session={} error={}", self.session_id, e);
                Err(ws_error_message(
                    "INVALID_MESSAGE",
                    "Invalid client message",
                    Some(serde_json::json!({ "session": self.session_id })),
                ))
            }
        }
    }

    fn submit(&mut self, input: &SubmissionInput, now: Instant) -> ServerWsMessage {
        let decision = evaluate_submission(input, &mut self.gate, now, &self.config);
        let feedback = submission_feedback(&decision, &self.config);
        match decision {
            Decision::Block(reason) => {
                warn!(
                    "[ContactSession] Submission blocked: session={} reason={}",
                    self.session_id,
                    reason.code()
                );
                ServerWsMessage::Blocked {
                    reason,
                    code: reason.code().to_string(),
                    feedback,
                }
            }
            Decision::Allow => {
                let received_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
                info!(
                    "[ContactSession] Submission accepted: session={} name={:?} email={:?} message={:?} at={}",
                    self.session_id, input.name, input.email, input.message, received_at
                );
                ServerWsMessage::Accepted { received_at, feedback }
            }
        }
    }
}

impl WsActorUtils for ContactSession {
    fn log_tag(&self) -> &'static str {
        "ContactSession"
    }
}

impl Actor for ContactSession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the session starts. The form is interactive from here on.
    fn started(&mut self, _ctx: &mut Self::Context) {
        self.open_form(Instant::now());
        info!("[ContactSession] Form opened: session={}", self.session_id);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        debug!(
            "[ContactSession] Closed: session={} attempts_in_window={}",
            self.session_id,
            self.gate.history.len()
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ContactSession {
    /// Handles incoming WebSocket messages from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match self.handle_text(&text, Instant::now()) {
                Ok(Some(reply)) => self.send_json(ctx, &reply),
                Ok(None) => (),
                Err(frame) => ctx.text(frame),
            },
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            _ => (),
        }
    }
}

/// WebSocket endpoint for the contact form.
pub async fn ws_contact(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(ContactSession::new(data.gate_config.clone()), &req, stream)
}
