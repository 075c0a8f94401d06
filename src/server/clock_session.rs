//! Live clock WebSocket session.
//!
//! Pushes the current time, date and greeting on connect and then once per tick.

use std::time::Duration;

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use chrono::{DateTime, Local, TimeZone, Timelike};
use log::debug;
use serde::Serialize;

use crate::config::clock::CLOCK_TICK_MS;
use crate::server::ws_actor_utils::WsActorUtils;
use crate::site::clock::ClockReading;
use crate::site::greeting::greeting_for_hour;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum ClockWsMessage {
    Tick {
        time: String,
        date: String,
        greeting: &'static str,
    },
}

impl ClockWsMessage {
    pub fn tick<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let ClockReading { time, date } = ClockReading::from_datetime(dt);
        Self::Tick {
            time,
            date,
            greeting: greeting_for_hour(dt.hour()),
        }
    }
}

pub struct ClockSession;

impl ClockSession {
    fn push_now(&self, ctx: &mut ws::WebsocketContext<Self>) {
        self.send_json(ctx, &ClockWsMessage::tick(&Local::now()));
    }
}

impl WsActorUtils for ClockSession {
    fn log_tag(&self) -> &'static str {
        "Clock"
    }
}

impl Actor for ClockSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        debug!("[Clock] Session started");
        self.push_now(ctx);
        ctx.run_interval(Duration::from_millis(CLOCK_TICK_MS), |act, ctx| {
            act.push_now(ctx);
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ClockSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            _ => (),
        }
    }
}

/// WebSocket endpoint for the live clock.
pub async fn ws_clock(req: HttpRequest, stream: web::Payload) -> Result<HttpResponse, Error> {
    ws::start(ClockSession, &req, stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_tick_payload() {
        let dt = Utc.with_ymd_and_hms(2025, 12, 25, 18, 0, 1).unwrap();
        let value = serde_json::to_value(ClockWsMessage::tick(&dt)).unwrap();
        assert_eq!(value["action"], "Tick");
        assert_eq!(value["data"]["time"], "18:00:01");
        assert_eq!(value["data"]["date"], "Thursday, December 25, 2025");
        assert_eq!(value["data"]["greeting"], "Good Evening!");
    }
}
