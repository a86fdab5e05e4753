use std::net::SocketAddr;

use crew_server::MissionServer;
use crew_server::config::ServerSection;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

async fn start(max_body_bytes: usize) -> TestServer {
    let settings = ServerSection {
        bind: "127.0.0.1:0".to_string(),
        max_body_bytes,
        read_timeout_secs: 5,
    };
    let (stop, stopped) = oneshot::channel::<()>();
    let server = MissionServer::bind(settings, async move {
        let _ = stopped.await;
    })
    .await
    .unwrap();
    let addr = server.local_addr();
    let handle = tokio::spawn(server.run());
    TestServer { addr, stop, handle }
}

impl TestServer {
    async fn shutdown(self) {
        let _ = self.stop.send(());
        self.handle.await.unwrap();
    }
}

/// Splits a raw response into (status, JSON body). An empty body reads as null.
fn parse_response(text: &str) -> (u16, Value) {
    let (head, body) = text.split_once("\r\n\r\n").unwrap();
    let status = head.split(' ').nth(1).unwrap().parse().unwrap();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).unwrap()
    };
    (status, body)
}

async fn exchange(addr: SocketAddr, raw: &[u8]) -> (u16, Value) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw).await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    parse_response(&String::from_utf8(response).unwrap())
}

fn get(path: &str) -> Vec<u8> {
    format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n").into_bytes()
}

fn post_mission(body: &str) -> Vec<u8> {
    format!(
        "POST /api/mission HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    )
    .into_bytes()
}

#[tokio::test]
async fn test_mission_round_trip() {
    let server = start(64 * 1024).await;

    let (status, body) = exchange(
        server.addr,
        &post_mission(r#"{"idea":"Build a developer portal with real-time analytics dashboards"}"#),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["missionBrief"]["codename"], "Developer Portal");
    assert_eq!(body["conversation"].as_array().unwrap().len(), 5);

    server.shutdown().await;
}

#[tokio::test]
async fn test_chunked_mission_request() {
    let server = start(64 * 1024).await;

    let first = r#"{"idea":"Plan a "#;
    let second = r#"birthday party"}"#;
    let raw = format!(
        "POST /api/mission HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Content-Type: application/json\r\nTransfer-Encoding: chunked\r\n\r\n\
         {:x}\r\n{}\r\n{:x}\r\n{}\r\n0\r\n\r\n",
        first.len(),
        first,
        second.len(),
        second
    );
    let (status, body) = exchange(server.addr, raw.as_bytes()).await;
    assert_eq!(status, 200);
    assert_eq!(body["missionBrief"]["codename"], "Birthday Party");

    server.shutdown().await;
}

#[tokio::test]
async fn test_chunked_body_over_limit_returns_413() {
    let server = start(16).await;

    let chunk = r#"{"idea":"Plan a birthday party with friends"}"#;
    let raw = format!(
        "POST /api/mission HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Transfer-Encoding: chunked\r\n\r\n{:x}\r\n{}\r\n0\r\n\r\n",
        chunk.len(),
        chunk
    );
    let (status, _) = exchange(server.addr, raw.as_bytes()).await;
    assert_eq!(status, 413);

    server.shutdown().await;
}

#[tokio::test]
async fn test_expect_continue_gets_interim_response() {
    let server = start(64 * 1024).await;

    let body = r#"{"idea":"Plan a birthday party"}"#;
    let head = format!(
        "POST /api/mission HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Content-Type: application/json\r\nContent-Length: {}\r\n\
         Expect: 100-continue\r\n\r\n",
        body.len()
    );
    let mut stream = TcpStream::connect(server.addr).await.unwrap();
    stream.write_all(head.as_bytes()).await.unwrap();

    let mut interim = Vec::new();
    let mut buf = [0u8; 256];
    while !String::from_utf8_lossy(&interim).contains("\r\n\r\n") {
        let read = stream.read(&mut buf).await.unwrap();
        assert!(read > 0, "connection closed before 100 Continue");
        interim.extend_from_slice(&buf[..read]);
    }
    let interim = String::from_utf8(interim).unwrap();
    assert!(interim.starts_with("HTTP/1.1 100 Continue\r\n"));
    let (_, leftover) = interim.split_once("\r\n\r\n").unwrap();
    let mut response = leftover.as_bytes().to_vec();

    stream.write_all(body.as_bytes()).await.unwrap();
    stream.read_to_end(&mut response).await.unwrap();
    let (status, json) = parse_response(&String::from_utf8(response).unwrap());
    assert_eq!(status, 200);
    assert_eq!(json["missionBrief"]["codename"], "Birthday Party");

    server.shutdown().await;
}

#[tokio::test]
async fn test_blank_idea_returns_400() {
    let server = start(64 * 1024).await;

    let (status, body) = exchange(server.addr, &post_mission(r#"{"idea":"   "}"#)).await;
    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        "Please provide a project idea or instruction for the agents."
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_malformed_json_returns_500() {
    let server = start(64 * 1024).await;

    let (status, body) = exchange(server.addr, &post_mission("{oops")).await;
    assert_eq!(status, 500);
    assert_eq!(
        body["error"],
        "The agent crew could not process this request right now. Please retry in a moment."
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_oversized_body_returns_413() {
    let server = start(16).await;

    let (status, _) = exchange(
        server.addr,
        &post_mission(r#"{"idea":"Plan a birthday party with friends"}"#),
    )
    .await;
    assert_eq!(status, 413);

    server.shutdown().await;
}

#[tokio::test]
async fn test_health_and_personas() {
    let server = start(64 * 1024).await;

    let (status, body) = exchange(server.addr, &get("/health")).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");

    let (status, body) = exchange(server.addr, &get("/api/personas")).await;
    assert_eq!(status, 200);
    assert_eq!(body[4]["displayName"], "Team Leader");

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_path_and_wrong_method() {
    let server = start(64 * 1024).await;

    let (status, _) = exchange(server.addr, &get("/missing")).await;
    assert_eq!(status, 404);
    let (status, _) = exchange(
        server.addr,
        b"DELETE /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert_eq!(status, 405);

    server.shutdown().await;
}

#[tokio::test]
async fn test_garbage_request_returns_400() {
    let server = start(64 * 1024).await;

    let (status, _) = exchange(server.addr, b"NONSENSE\r\n\r\n").await;
    assert_eq!(status, 400);

    server.shutdown().await;
}
