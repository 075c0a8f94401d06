use actix::ActorContext;
use actix_web_actors::ws;
use log::error;
use serde::Serialize;
use serde_json::Value;

use crate::server::ws_error::ws_error_message;

/// Helpers shared by the WebSocket session actors (contact, clock, animation).
pub trait WsActorUtils {
    /// Short tag used in log lines, e.g. `ContactSession`.
    fn log_tag(&self) -> &'static str;

    /// Serialize `msg` and send it. On serialization failure, notify the client and close.
    fn send_json<A, T>(&self, ctx: &mut ws::WebsocketContext<A>, msg: &T)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
        T: Serialize,
    {
        match serde_json::to_string(msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[{}] Failed to serialize outbound message: {}", self.log_tag(), e);
                ctx.text(ws_error_message("INTERNAL_ERROR", "Internal server error", None));
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }

    /// Send an error frame without closing the session.
    fn send_error<A>(
        &self,
        ctx: &mut ws::WebsocketContext<A>,
        code: &str,
        message: &str,
        context: Option<Value>,
    )
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        ctx.text(ws_error_message(code, message, context));
    }
}
