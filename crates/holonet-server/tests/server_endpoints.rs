use serde_json::{json, Value};
use tokio::task::JoinHandle;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use holonet_server::{build_app, AppConfig};

const REWRITE_BASE: &str = "https://gateway.example.com";

/// Upstream with a two-page people collection and a broken planets one.
async fn start_upstream() -> MockServer {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                person(&upstream.uri(), 3, "Darth Vader"),
                person(&upstream.uri(), 4, "Han Solo"),
            ],
            "next": null
        })))
        .mount(&upstream)
        .await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                person(&upstream.uri(), 1, "Luke Skywalker"),
                person(&upstream.uri(), 2, "Leia Organa"),
            ],
            "next": format!("{}/people/?page=2", upstream.uri())
        })))
        .mount(&upstream)
        .await;

    Mock::given(method("GET"))
        .and(path("/planets/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    upstream
}

fn person(upstream: &str, id: i64, name: &str) -> Value {
    json!({
        "name": name,
        "films": [format!("{upstream}/films/1/")],
        "url": format!("{upstream}/people/{id}/")
    })
}

async fn start_gateway(upstream: &MockServer) -> (String, tokio::sync::oneshot::Sender<()>, JoinHandle<()>) {
    let mut cfg = AppConfig::default();
    cfg.upstream.base_url = upstream.uri();
    cfg.rewrite.base_url = REWRITE_BASE.to_string();

    let app = build_app(&cfg).expect("build app");

    // Bind to an ephemeral port
    let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await;
    });

    (format!("http://{addr}"), tx, server)
}

#[tokio::test]
async fn gateway_endpoints_work() {
    let upstream = start_upstream().await;
    let (base, shutdown_tx, handle) = start_gateway(&upstream).await;
    let client = reqwest::Client::new();

    // OPTIONS preflight, fixed contract independent of the path
    let resp = client
        .request(reqwest::Method::OPTIONS, format!("{base}/people"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
    let headers = resp.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(headers["access-control-max-age"], "3600");

    // GET / defaults to people; envelope shape; CORS header on responses
    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["meta"]["total_items"], 4);
    assert_eq!(body["meta"]["current_page"], 1);
    assert_eq!(body["meta"]["per_page"], 10);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);

    // Filter via the kind path, with rewritten addresses
    let resp = client
        .get(format!("{base}/people?filter=skywalker"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "Luke Skywalker");
    assert_eq!(
        body["data"][0]["url"],
        format!("{REWRITE_BASE}/people/1/")
    );
    assert_eq!(
        body["data"][0]["films"][0],
        format!("{REWRITE_BASE}/films/1/")
    );

    // Sorted pagination
    let resp = client
        .get(format!("{base}/people?sort=name&page=2&size=1"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"][0]["name"], "Han Solo");
    assert_eq!(
        body["meta"],
        json!({"current_page": 2, "per_page": 1, "total_items": 4, "total_pages": 4})
    );

    // Lookup by id
    let resp = client.get(format!("{base}/people/2")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Leia Organa");
    assert_eq!(body["url"], format!("{REWRITE_BASE}/people/2/"));

    // Lookup miss
    let resp = client.get(format!("{base}/people/99")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Not Found");

    // Health endpoint
    let resp = client.get(format!("{base}/healthz")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn gateway_rejects_bad_requests() {
    let upstream = start_upstream().await;
    let (base, shutdown_tx, handle) = start_gateway(&upstream).await;
    let client = reqwest::Client::new();

    // Unsupported kind via query parameter
    let resp = client
        .get(format!("{base}/?type=wookies"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("wookies"));

    // Unsupported kind via path
    let resp = client.get(format!("{base}/wookies")).send().await.unwrap();
    assert_eq!(resp.status(), 400);

    // Non-integer page
    let resp = client
        .get(format!("{base}/?type=people&page=two"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Page and size must be integers");

    // Non-integer id
    let resp = client
        .get(format!("{base}/people/luke"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "ID must be an integer");

    // Zero size
    let resp = client
        .get(format!("{base}/people?size=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Paths deeper than kind/id fall through to 404
    let resp = client
        .get(format!("{base}/people/1/films"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Not Found");

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn upstream_failures_map_to_bad_gateway() {
    let upstream = start_upstream().await;
    let (base, shutdown_tx, handle) = start_gateway(&upstream).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/planets")).send().await.unwrap();
    assert_eq!(resp.status(), 502);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("unavailable"));

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}
