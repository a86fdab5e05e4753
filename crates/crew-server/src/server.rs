//! `warp` routes and server lifecycle.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `POST /api/mission` | mission endpoint |
//! | `GET /api/personas` | persona roster |
//! | `GET /health` | `{"status":"ok"}` |
//!
//! Every response, including rejections, is a JSON body.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::time::Duration;

use anyhow::{Context, Result};
use bytes::Buf;
use crew_application::handle_mission_request;
use crew_application::mission_endpoint::RETRY_MESSAGE;
use crew_core::persona::all_personas;
use futures::{Stream, StreamExt};
use serde_json::{Value, json};
use tracing::{debug, error, info, warn};
use warp::http::StatusCode;
use warp::reject::{MethodNotAllowed, Reject};
use warp::{Filter, Rejection, Reply};

use crate::config::ServerSection;

#[derive(Debug)]
struct BodyTooLarge;
impl Reject for BodyTooLarge {}

#[derive(Debug)]
struct BodyTimeout;
impl Reject for BodyTimeout {}

#[derive(Debug)]
struct MalformedBody;
impl Reject for MalformedBody {}

/// All routes, with rejections recovered into JSON errors.
pub fn routes(
    settings: &ServerSection,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone + Send + Sync + 'static {
    let limit = settings.max_body_bytes;
    let read_timeout = settings.read_timeout();

    let mission = warp::path!("api" / "mission")
        .and(warp::post())
        .and(warp::header::optional::<u64>("content-length"))
        .and(warp::body::stream())
        .and_then(move |declared: Option<u64>, body| async move {
            if declared.is_some_and(|length| length > limit as u64) {
                return Err(warp::reject::custom(BodyTooLarge));
            }
            let body = read_body(body, limit, read_timeout).await?;
            Ok::<_, Rejection>(run_mission(body).await)
        });

    let personas = warp::path!("api" / "personas")
        .and(warp::get())
        .map(|| warp::reply::json(&all_personas()));

    let health = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "status": "ok" })));

    mission.or(personas).or(health).recover(recover)
}

/// Collects a request body, chunked or not, up to `limit` bytes.
async fn read_body<S, B>(
    body: S,
    limit: usize,
    read_timeout: Duration,
) -> Result<Vec<u8>, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    let collect = async move {
        tokio::pin!(body);
        let mut out = Vec::new();
        while let Some(chunk) = body.next().await {
            let mut chunk = chunk.map_err(|e| {
                debug!("[MissionServer] Failed to read body: {}", e);
                warp::reject::custom(MalformedBody)
            })?;
            while chunk.has_remaining() {
                let bytes = chunk.chunk();
                if out.len() + bytes.len() > limit {
                    return Err(warp::reject::custom(BodyTooLarge));
                }
                out.extend_from_slice(bytes);
                let read = bytes.len();
                chunk.advance(read);
            }
        }
        Ok(out)
    };

    tokio::time::timeout(read_timeout, collect)
        .await
        .map_err(|_| warp::reject::custom(BodyTimeout))?
}

async fn run_mission(body: Vec<u8>) -> warp::reply::Response {
    // Synthesis is CPU-bound; keep it off the reactor threads.
    match tokio::task::spawn_blocking(move || handle_mission_request(&body)).await {
        Ok(outcome) => json_reply(outcome.status, &outcome.body),
        Err(e) => {
            error!("[MissionServer] Mission task failed: {}", e);
            json_reply(500, &json!({ "error": RETRY_MESSAGE }))
        }
    }
}

async fn recover(rejection: Rejection) -> Result<warp::reply::Response, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (404, "Not found.")
    } else if rejection.find::<BodyTooLarge>().is_some()
        || rejection.find::<warp::reject::PayloadTooLarge>().is_some()
    {
        (413, "Request body is too large.")
    } else if rejection.find::<BodyTimeout>().is_some() {
        (408, "Request timed out.")
    } else if rejection.find::<MethodNotAllowed>().is_some() {
        (405, "Method not allowed.")
    } else {
        warn!("[MissionServer] Rejected request: {:?}", rejection);
        (400, "Malformed HTTP request.")
    };
    Ok(json_reply(status, &json!({ "error": message })))
}

fn json_reply(status: u16, body: &Value) -> warp::reply::Response {
    let status = StatusCode::from_u16(status)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

type Serving = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A bound server that stops when its shutdown future resolves.
pub struct MissionServer {
    addr: SocketAddr,
    serving: Serving,
}

impl MissionServer {
    /// Binds `settings.bind`. The server stops accepting once `shutdown`
    /// resolves and finishes after in-flight requests complete.
    pub async fn bind<F>(settings: ServerSection, shutdown: F) -> Result<Self>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = tokio::net::lookup_host(settings.bind.as_str())
            .await
            .with_context(|| format!("Failed to resolve {}", settings.bind))?
            .next()
            .with_context(|| format!("No address for {}", settings.bind))?;

        let (addr, serving) = warp::serve(routes(&settings))
            .try_bind_with_graceful_shutdown(addr, shutdown)
            .with_context(|| format!("Failed to bind {}", settings.bind))?;

        Ok(Self {
            addr,
            serving: Box::pin(serving),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn run(self) {
        info!("[MissionServer] Listening on http://{}", self.addr);
        self.serving.await;
        info!("[MissionServer] Stopped");
    }
}
