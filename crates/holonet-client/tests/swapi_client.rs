use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use holonet_client::{CatalogClient, ClientError, SwapiClient};
use holonet_core::ResourceKind;

fn client_for(server: &MockServer) -> SwapiClient {
    SwapiClient::new(server.uri(), Duration::from_secs(5)).expect("build client")
}

#[tokio::test]
async fn follows_next_cursor_across_pages_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"name": "C-3PO"}],
            "next": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"name": "Luke Skywalker"}],
            "next": format!("{}/people/?page=2", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    let people = client_for(&server)
        .fetch_collection(ResourceKind::People)
        .await
        .unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(people[0]["name"], "Luke Skywalker");
    assert_eq!(people[1]["name"], "C-3PO");
}

#[tokio::test]
async fn single_page_collection_needs_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/films/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"title": "A New Hope"}, {"title": "The Empire Strikes Back"}],
            "next": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let films = client_for(&server)
        .fetch_collection(ResourceKind::Films)
        .await
        .unwrap();

    assert_eq!(films.len(), 2);
    assert_eq!(films[0]["title"], "A New Hope");
}

#[tokio::test]
async fn non_success_status_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planets/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_collection(ResourceKind::Planets)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Unavailable(_)));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn failing_second_page_aborts_without_partial_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"name": "Luke Skywalker"}],
            "next": format!("{}/people/?page=2", server.uri())
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_collection(ResourceKind::People)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Unavailable(_)));
}

#[tokio::test]
async fn unparsable_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/species/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_collection(ResourceKind::Species)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Malformed(_)));
}

#[tokio::test]
async fn wrong_page_shape_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vehicles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_collection(ResourceKind::Vehicles)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Malformed(_)));
}

#[tokio::test]
async fn each_kind_hits_its_collection_path() {
    for kind in ResourceKind::ALL {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/{}/", kind.collection_path())))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [],
                "next": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = client_for(&server).fetch_collection(kind).await.unwrap();
        assert!(records.is_empty());
    }
}
