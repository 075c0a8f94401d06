/// WebSocket session for the bouncing ball easter egg.
///
/// `Start` drops a ball and runs one physics step per frame interval, pushing each frame to
/// the client. `Stop` cancels the interval. A second `Start` while running is ignored.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{info, debug};
use rand::Rng;

use super::messages::{ClientWsMessage, ServerWsMessage, ViewportQuery};
use crate::config::animation::{
    BallPhysics, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, POSITION_LOG_EVERY,
};
use crate::server::ws_actor_utils::WsActorUtils;
use crate::site::ball::{Ball, Frame, Viewport, Wall};

pub struct AnimationSession {
    pub viewport: Viewport,
    pub physics: BallPhysics,
    ball: Option<Ball>,
    interval: Option<SpawnHandle>,
    frames: u64,
}

impl AnimationSession {
    pub fn new(viewport: Viewport, physics: BallPhysics) -> Self {
        Self {
            viewport,
            physics,
            ball: None,
            interval: None,
            frames: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.ball.is_some()
    }

    /// Launch a new ball. Returns false if one is already bouncing.
    pub fn launch<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.is_active() {
            return false;
        }
        self.ball = Some(Ball::launch(self.viewport, &self.physics, rng));
        self.frames = 0;
        info!("[Animation] Easter egg discovered!");
        true
    }

    /// Advance the ball one frame. Returns None when no ball is active.
    pub fn advance(&mut self) -> Option<Frame> {
        let ball = self.ball.as_mut()?;
        for wall in ball.step(self.viewport, &self.physics) {
            let name = match wall {
                Wall::Left => "LEFT wall",
                Wall::Right => "RIGHT wall",
                Wall::Ceiling => "CEILING",
                Wall::Floor => "FLOOR",
            };
            debug!("[Animation] Ball bounced off {}!", name);
        }
        let frame = ball.frame();
        self.frames += 1;
        if self.frames % POSITION_LOG_EVERY == 0 {
            debug!(
                "[Animation] Ball position - left: {:.2}px, top: {:.2}px, right: {:.2}px, bottom: {:.2}px",
                frame.left,
                frame.top,
                frame.left + self.physics.ball_size,
                frame.top + self.physics.ball_size
            );
        }
        Some(frame)
    }

    /// Drop the ball. Returns false if nothing was running.
    pub fn halt(&mut self) -> bool {
        let was_active = self.ball.take().is_some();
        if was_active {
            info!("[Animation] Animation stopped.");
        }
        was_active
    }

    fn start_interval(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        let handle = ctx.run_interval(self.physics.frame_interval, |act, ctx| {
            if let Some(frame) = act.advance() {
                act.send_json(ctx, &ServerWsMessage::Frame(frame));
            }
        });
        self.interval = Some(handle);
    }

    fn stop_interval(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        if let Some(handle) = self.interval.take() {
            ctx.cancel_future(handle);
        }
    }
}

impl WsActorUtils for AnimationSession {
    fn log_tag(&self) -> &'static str {
        "Animation"
    }
}

impl Actor for AnimationSession {
    type Context = ws::WebsocketContext<Self>;

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.halt();
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for AnimationSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<ClientWsMessage>(&text) {
                Ok(ClientWsMessage::Start) => {
                    if self.launch(&mut rand::rng()) {
                        self.send_json(ctx, &ServerWsMessage::Started);
                        self.start_interval(ctx);
                    }
                }
                Ok(ClientWsMessage::Stop) => {
                    self.stop_interval(ctx);
                    self.halt();
                    self.send_json(ctx, &ServerWsMessage::Stopped);
                }
                Ok(ClientWsMessage::Resize(viewport)) => {
                    self.viewport = viewport;
                }
                Err(e) => {
                    debug!("[Animation] Invalid client message: {}", e);
                    self.send_error(ctx, "INVALID_MESSAGE", "Invalid client message", None);
                }
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

/// WebSocket endpoint for the animation.
///
/// Accepts optional `width` and `height` query parameters (viewport size in pixels).
pub async fn ws_animation(
    req: HttpRequest,
    stream: web::Payload,
    query: web::Query<ViewportQuery>,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let viewport = Viewport {
        width: query.width.unwrap_or(DEFAULT_VIEWPORT_WIDTH),
        height: query.height.unwrap_or(DEFAULT_VIEWPORT_HEIGHT),
    };
    ws::start(AnimationSession::new(viewport, data.physics), &req, stream)
}
