//! Shared utilities for gateway integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use apps_gateway::config::GatewayConfig;
use apps_gateway::http::HttpServer;
use apps_gateway::lifecycle::Shutdown;

/// Start a mock upstream that returns a fixed JSON body with status 200.
/// Returns the address it is listening on.
#[allow(dead_code)]
pub async fn start_mock_upstream(body: &'static str) -> SocketAddr {
    start_programmable_upstream(move || async move { (200, body.to_string()) }).await
}

/// Start a programmable mock upstream; the closure decides (status, body)
/// per request. Returns the address it is listening on.
#[allow(dead_code)]
pub async fn start_programmable_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock upstream that accepts connections and never responds.
/// Returns the address it is listening on.
#[allow(dead_code)]
pub async fn start_hung_upstream() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    tokio::spawn(async move {
                        // Hold the connection open, writing nothing.
                        let _socket = socket;
                        tokio::time::sleep(Duration::from_secs(60)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Build a gateway config pointed at the given upstream address.
#[allow(dead_code)]
pub fn gateway_config(upstream: SocketAddr) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstream.base_url = format!("http://{upstream}");
    config
}

/// Spawn a gateway on an ephemeral port. Returns its bound address and the
/// shutdown handle tests trigger when done.
#[allow(dead_code)]
pub async fn start_gateway(config: GatewayConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}

/// Non-pooled test client, so every inbound call opens a fresh connection.
#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
