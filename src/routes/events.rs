use std::time::Duration;

use actix_web::{http::header, web, HttpResponse};
use serde::Serialize;
use tokio::time::{interval, MissedTickBehavior};
use tokio_stream::wrappers::IntervalStream;
use tokio_stream::StreamExt;

use crate::{calendar::Clock, state::AppState};

const TICK: Duration = Duration::from_secs(1);

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/clock/events").route(web::get().to(stream_clock)));
}

#[derive(Serialize)]
struct ClockEvent {
    date_line: String,
    time_line: String,
}

impl From<Clock> for ClockEvent {
    fn from(clock: Clock) -> Self {
        Self {
            date_line: clock.date_line(),
            time_line: clock.time_line(),
        }
    }
}

/// One `tick` event per second. The interval lives inside the response
/// stream and is dropped with it when the browser disconnects.
async fn stream_clock(state: web::Data<AppState>) -> HttpResponse {
    let clock = state.clock;
    let mut ticker = interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let stream = IntervalStream::new(ticker).map(move |_| {
        Ok::<web::Bytes, actix_web::Error>(event_to_bytes(&ClockEvent::from(clock.read())))
    });

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(stream)
}

fn event_to_bytes(event: &ClockEvent) -> web::Bytes {
    let payload = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    web::Bytes::from(format!("event: tick\ndata: {payload}\n\n"))
}
