//! The listener's in-flight request cap is enforced, not just logged.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

mod common;

#[tokio::test]
async fn max_connections_caps_concurrent_upstream_calls() {
    let current = Arc::new(AtomicU32::new(0));
    let peak = Arc::new(AtomicU32::new(0));

    let (cur, pk) = (current.clone(), peak.clone());
    let upstream = common::start_programmable_upstream(move || {
        let cur = cur.clone();
        let pk = pk.clone();
        async move {
            let in_flight = cur.fetch_add(1, Ordering::SeqCst) + 1;
            pk.fetch_max(in_flight, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(200)).await;
            cur.fetch_sub(1, Ordering::SeqCst);
            (200, r#"[{"appName":"appOne"}]"#.to_string())
        }
    })
    .await;

    let mut config = common::gateway_config(upstream);
    config.listener.max_connections = 1;
    let (addr, shutdown) = common::start_gateway(config).await;

    let client = common::http_client();
    let url = format!("http://{addr}/api/gateway/apps/search");

    let request = |client: reqwest::Client, url: String| async move {
        client
            .get(&url)
            .query(&[("term", "app")])
            .send()
            .await
            .expect("Gateway unreachable")
            .status()
    };

    let (a, b, c) = tokio::join!(
        request(client.clone(), url.clone()),
        request(client.clone(), url.clone()),
        request(client.clone(), url.clone())
    );

    // Excess requests queue for a slot rather than failing.
    assert_eq!(a, 200);
    assert_eq!(b, 200);
    assert_eq!(c, 200);
    assert_eq!(
        peak.load(Ordering::SeqCst),
        1,
        "only one call may be in flight at a time"
    );

    shutdown.trigger();
}
