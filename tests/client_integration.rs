//! Integration tests for the Cachet client against a mocked HTTP server.
//!
//! These tests pin the transport contract (envelope unwrapping, error
//! snapshots, auth headers) and the resource-action semantics the library
//! guarantees: single-slot caching, page-order search, and the
//! one-page-per-search limitation.

use cachet_sdk::{
    Auth, CachetClient, ComponentActions, GeneralActions, IncidentActions, NewPoint, PageQuery,
    PointActions,
};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

/// Builds a client against the mock server, with test logging enabled
/// when `RUST_LOG` asks for it.
fn client_for(server: &ServerGuard) -> CachetClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    CachetClient::new(server.url()).expect("mock server URL must be a valid endpoint")
}

fn default_query_matcher() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("per_page".into(), "1000".into()),
        Matcher::UrlEncoded("current_page".into(), "1".into()),
    ])
}

#[tokio::test]
async fn ping_returns_pong() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": "Pong!"}"#)
        .create_async()
        .await;

    let general = GeneralActions::new(client_for(&server));
    assert_eq!(general.ping().await.unwrap(), "Pong!");
    mock.assert_async().await;
}

#[tokio::test]
async fn version_unwraps_data() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/version")
        .with_status(200)
        .with_body(r#"{"meta": {"on_latest": true}, "data": "2.3.10"}"#)
        .create_async()
        .await;

    let general = GeneralActions::new(client_for(&server));
    assert_eq!(general.version().await.unwrap(), "2.3.10");
}

#[tokio::test]
async fn server_error_attaches_request_and_response() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/ping")
        .with_status(500)
        .with_body(r#"{"errors": [{"title": "Server Error", "detail": "something broke"}]}"#)
        .create_async()
        .await;

    let general = GeneralActions::new(client_for(&server));
    let err = general.ping().await.unwrap_err();

    assert_eq!(err.request().method(), &reqwest::Method::GET);
    assert_eq!(err.request().url().path(), "/ping");
    let response = err.response().expect("server replied, snapshot expected");
    assert_eq!(response.status(), 500);
    assert!(response.body().contains("something broke"));
    assert_eq!(err.to_string(), "something broke");
}

#[tokio::test]
async fn refused_connection_has_no_response() {
    // Port 9 (discard) is unbound in the test environment; the connection
    // is refused before any response exists.
    let client = CachetClient::new("http://127.0.0.1:9").unwrap();
    let general = GeneralActions::new(client);

    let err = general.ping().await.unwrap_err();
    assert_eq!(err.request().url().path(), "/ping");
    assert!(err.response().is_none());
    assert!(err.status().is_none());
}

#[tokio::test]
async fn undecodable_body_attaches_response() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/ping")
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let general = GeneralActions::new(client_for(&server));
    let err = general.ping().await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(200));
    assert!(err
        .response()
        .is_some_and(|r| r.body().contains("not json")));
}

#[tokio::test]
async fn list_returns_points_in_server_order() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/metrics/7/points")
        .match_query(default_query_matcher())
        .with_status(200)
        .with_body(
            json!({
                "data": [
                    {"id": 3, "value": 10.0},
                    {"id": 1, "value": 12.5},
                    {"id": 2, "value": 11.0}
                ],
                "meta": {"pagination": {
                    "total": 3, "count": 3, "per_page": 1000,
                    "current_page": 1, "total_pages": 1,
                    "links": {"next_page": null, "previous_page": null}
                }}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut points = PointActions::new(client_for(&server));
    let page = points.list(7, PageQuery::default()).await.unwrap();

    let ids: Vec<_> = page.data.iter().map(|p| p["id"].clone()).collect();
    assert_eq!(ids, vec![json!(3), json!(1), json!(2)]);
    assert!(!page.has_next());
    assert_eq!(page.meta.unwrap().pagination.unwrap().total, 3);
}

#[tokio::test]
async fn list_twice_performs_two_calls() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/metrics/7/points")
        .match_query(default_query_matcher())
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .expect(2)
        .create_async()
        .await;

    let mut points = PointActions::new(client_for(&server));
    points.list(7, PageQuery::default()).await.unwrap();
    points.list(7, PageQuery::default()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn list_cached_twice_performs_one_call() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/metrics/7/points")
        .match_query(default_query_matcher())
        .with_status(200)
        .with_body(r#"{"data": [{"id": 1, "value": "10"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let mut points = PointActions::new(client_for(&server));
    let first = points.list_cached(7, PageQuery::default()).await.unwrap();
    // The slot is pinned: a different page geometry is ignored entirely.
    let second = points.list_cached(7, PageQuery::new(5, 2)).await.unwrap();

    assert_eq!(first.data, second.data);
    mock.assert_async().await;
}

#[tokio::test]
async fn cache_mode_routes_list_through_slot() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/metrics/7/points")
        .match_query(default_query_matcher())
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .expect(1)
        .create_async()
        .await;

    let mut points = PointActions::new(client_for(&server));
    points.set_cache(true);
    points.list(7, PageQuery::default()).await.unwrap();
    points.list(7, PageQuery::default()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn invalidate_cache_forces_refetch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/metrics/7/points")
        .match_query(default_query_matcher())
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .expect(2)
        .create_async()
        .await;

    let mut points = PointActions::new(client_for(&server));
    points.list_cached(7, PageQuery::default()).await.unwrap();
    points.invalidate_cache();
    points.list_cached(7, PageQuery::default()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn search_returns_first_match_in_page_order() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/metrics/7/points")
        .match_query(default_query_matcher())
        .with_status(200)
        .with_body(r#"{"data": [{"id": 1, "value": "10"}, {"id": 2, "value": "foo10bar"}]}"#)
        .create_async()
        .await;

    let mut points = PointActions::new(client_for(&server));
    let matches = points
        .search(7, "10", "value", 1, PageQuery::default())
        .await
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["id"], 1);
    assert_eq!(matches[0]["value"], "10");
}

#[tokio::test]
async fn search_with_larger_limit_preserves_order() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/metrics/7/points")
        .match_query(default_query_matcher())
        .with_status(200)
        .with_body(
            r#"{"data": [
                {"id": 1, "value": "10"},
                {"id": 2, "value": "none"},
                {"id": 3, "value": "foo10bar"},
                {"id": 4, "value": "x10"}
            ]}"#,
        )
        .create_async()
        .await;

    let mut points = PointActions::new(client_for(&server));
    let matches = points
        .search(7, "10", "value", 2, PageQuery::default())
        .await
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["id"], 1);
    assert_eq!(matches[1]["id"], 3);
}

#[tokio::test]
async fn search_on_numeric_field_uses_equality_only() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/metrics/7/points")
        .match_query(default_query_matcher())
        .with_status(200)
        .with_body(r#"{"data": [{"id": 1, "value": 100}, {"id": 2, "value": 10}]}"#)
        .expect(2)
        .create_async()
        .await;

    let mut points = PointActions::new(client_for(&server));

    // 10 equals the second point's value; it is NOT a substring match
    // against 100.
    let numeric = points
        .search(7, 10, "value", 10, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(numeric.len(), 1);
    assert_eq!(numeric[0]["id"], 2);

    // A string needle never matches a numeric field.
    let textual = points
        .search(7, "10", "value", 10, PageQuery::default())
        .await
        .unwrap();
    assert!(textual.is_empty());
}

#[tokio::test]
async fn search_fetches_exactly_one_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/metrics/7/points")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("per_page".into(), "2".into()),
            Matcher::UrlEncoded("current_page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "data": [{"id": 1, "value": "a"}, {"id": 2, "value": "b"}],
                "meta": {"pagination": {
                    "total": 50, "count": 2, "per_page": 2,
                    "current_page": 1, "total_pages": 25,
                    "links": {"next_page": "...?current_page=2", "previous_page": null}
                }}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let mut points = PointActions::new(client_for(&server));
    // The collection has more pages, but search only ever sees the one it
    // fetched.
    let matches = points
        .search(7, "z", "value", 10, PageQuery::new(2, 1))
        .await
        .unwrap();

    assert!(matches.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn create_point_posts_body_and_unwraps_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/metrics/7/points")
        .match_body(Matcher::Json(json!({"value": 10.5})))
        .with_status(200)
        .with_body(r#"{"data": {"id": 99, "metric_id": 7, "value": 10.5}}"#)
        .create_async()
        .await;

    let points = PointActions::new(client_for(&server));
    let stored = points.create(7, &NewPoint::new(10.5)).await.unwrap();

    assert_eq!(stored["id"], 99);
    assert_eq!(stored["metric_id"], 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_point_succeeds_on_empty_reply() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/metrics/7/points/99")
        .with_status(204)
        .create_async()
        .await;

    let points = PointActions::new(client_for(&server));
    points.delete(7, 99).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn token_header_reaches_the_wire() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/metrics/7/points")
        .match_header("x-cachet-token", "9yMHsdioQosnyVK4iCVR")
        .with_status(200)
        .with_body(r#"{"data": {"id": 1, "value": 1.0}}"#)
        .create_async()
        .await;

    let client = client_for(&server).with_auth(Auth::token("9yMHsdioQosnyVK4iCVR"));
    let points = PointActions::new(client);
    points.create(7, &NewPoint::new(1.0)).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn basic_auth_reaches_the_wire() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .match_header("authorization", Matcher::Regex("^Basic ".into()))
        .with_status(200)
        .with_body(r#"{"data": "Pong!"}"#)
        .create_async()
        .await;

    let client = client_for(&server).with_auth(Auth::basic("admin@example.com", "secret"));
    let general = GeneralActions::new(client);
    general.ping().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn component_get_unwraps_data() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/components/9")
        .with_status(200)
        .with_body(r#"{"data": {"id": 9, "name": "API", "status": 1}}"#)
        .create_async()
        .await;

    let components = ComponentActions::new(client_for(&server));
    let component = components.get((), 9).await.unwrap();
    assert_eq!(component["name"], "API");
    assert_eq!(component["status"], 1);
}

#[tokio::test]
async fn incident_update_puts_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/incidents/12")
        .match_body(Matcher::Json(json!({"status": 4})))
        .with_status(200)
        .with_body(r#"{"data": {"id": 12, "status": 4}}"#)
        .create_async()
        .await;

    let incidents = IncidentActions::new(client_for(&server));
    let updated = incidents.update((), 12, &json!({"status": 4})).await.unwrap();
    assert_eq!(updated["status"], 4);
    mock.assert_async().await;
}

#[tokio::test]
async fn not_found_is_distinguishable_by_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/components/404")
        .with_status(404)
        .with_body(r#"{"errors": [{"title": "Not Found", "detail": "Component not found"}]}"#)
        .create_async()
        .await;

    let components = ComponentActions::new(client_for(&server));
    let err = components.get((), 404).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(err.to_string(), "Component not found");
}
