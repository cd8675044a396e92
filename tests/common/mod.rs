//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Read one HTTP request: method, path and any body announced by
/// Content-Length.
async fn read_request(socket: &mut TcpStream) -> Option<(String, String, String)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut request_line = head.lines().next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some((method, path, String::from_utf8_lossy(&body).to_string()))
}

async fn write_response(socket: &mut TcpStream, status: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Start a member health endpoint returning a fixed JSON body.
pub async fn start_health_endpoint(body: &'static str) -> SocketAddr {
    start_health_endpoint_with_delay(body, Duration::ZERO).await
}

/// Start a member health endpoint that stalls before answering, to
/// exercise the probe timeout.
#[allow(dead_code)]
pub async fn start_health_endpoint_with_delay(body: &'static str, delay: Duration) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                if read_request(&mut socket).await.is_none() {
                    return;
                }
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                write_response(&mut socket, "200 OK", body).await;
            });
        }
    });

    addr
}

/// An address nothing listens on (bound once to reserve it, then dropped).
pub async fn unreachable_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Handle onto a mock workload controller.
#[allow(dead_code)]
pub struct MockWorkloadController {
    pub addr: SocketAddr,
    pub replicas: Arc<AtomicU32>,
    pub ready_replicas: Arc<AtomicU32>,
    pub put_count: Arc<AtomicU32>,
}

/// Start a mock workload controller speaking the scale endpoint protocol:
/// `GET /clusters/<id>/status`, `GET|PUT /clusters/<id>/replicas`.
#[allow(dead_code)]
pub async fn start_workload_controller(replicas: u32, ready_replicas: u32) -> MockWorkloadController {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let replicas = Arc::new(AtomicU32::new(replicas));
    let ready = Arc::new(AtomicU32::new(ready_replicas));
    let puts = Arc::new(AtomicU32::new(0));

    let handler_replicas = replicas.clone();
    let handler_ready = ready.clone();
    let handler_puts = puts.clone();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let replicas = handler_replicas.clone();
            let ready = handler_ready.clone();
            let puts = handler_puts.clone();
            tokio::spawn(async move {
                let Some((method, path, body)) = read_request(&mut socket).await else {
                    return;
                };

                if method == "GET" && path.ends_with("/status") {
                    let body = format!(
                        "{{\"replicas\": {}, \"ready_replicas\": {}}}",
                        replicas.load(Ordering::SeqCst),
                        ready.load(Ordering::SeqCst)
                    );
                    write_response(&mut socket, "200 OK", &body).await;
                } else if method == "GET" && path.ends_with("/replicas") {
                    let body = format!("{{\"replicas\": {}}}", replicas.load(Ordering::SeqCst));
                    write_response(&mut socket, "200 OK", &body).await;
                } else if method == "PUT" && path.ends_with("/replicas") {
                    let desired = serde_json::from_str::<serde_json::Value>(&body)
                        .ok()
                        .and_then(|v| v.get("replicas").and_then(|n| n.as_u64()));
                    match desired {
                        Some(n) => {
                            puts.fetch_add(1, Ordering::SeqCst);
                            replicas.store(n as u32, Ordering::SeqCst);
                            write_response(&mut socket, "200 OK", "{}").await;
                        }
                        None => write_response(&mut socket, "400 Bad Request", "{}").await,
                    }
                } else {
                    write_response(&mut socket, "404 Not Found", "{}").await;
                }
            });
        }
    });

    MockWorkloadController {
        addr,
        replicas,
        ready_replicas: ready,
        put_count: puts,
    }
}
