//! End-to-end tests of the REST API against an in-process service

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use reputation_hub::api::{configure_routes, ApiState, AppState};
use reputation_hub::config::Settings;
use reputation_hub::metrics::metrics_endpoint;
use reputation_hub::store::EngineStore;

macro_rules! test_app {
    () => {{
        let settings = Settings::default();
        let store = Arc::new(EngineStore::new());
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new("reputation-hub", "test-instance")))
                .app_data(web::Data::new(ApiState::new(store, &settings)))
                .configure(configure_routes)
                .route("/metrics", web::get().to(metrics_endpoint)),
        )
        .await
    }};
}

macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr $(,)?) => {{
        let req = test::TestRequest::post().uri($uri).set_json($body).to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

macro_rules! get_json {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

macro_rules! register {
    ($app:expr, $id:expr) => {{
        let id: &str = $id;
        let (status, _) = post_json!(
            $app,
            "/api/agents/register",
            json!({ "agentId": id, "name": format!("Agent {}", id), "wallet": format!("0x{}", id) })
        );
        assert_eq!(status, StatusCode::OK);
    }};
}

fn review_body(reviewer: Option<&str>, rating: u32) -> Value {
    let mut body = json!({
        "ratings": { "reliability": rating, "quality": rating, "communication": rating }
    });
    if let Some(reviewer) = reviewer {
        body["reviewerId"] = json!(reviewer);
    }
    body
}

macro_rules! review {
    ($app:expr, $agent:expr, $reviewer:expr, $rating:expr) => {{
        let uri = format!("/api/agents/{}/reviews", $agent);
        let (status, _) = post_json!($app, &uri, review_body($reviewer, $rating));
        assert_eq!(status, StatusCode::OK);
    }};
}

#[actix_rt::test]
async fn test_health_endpoints() {
    let app = test_app!();

    let (status, body) = get_json!(app, "/health");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["instanceId"], "test-instance");

    register!(app, "alice");
    let (_, body) = get_json!(app, "/ready");
    assert_eq!(body["agents"], 1);

    let (_, body) = get_json!(app, "/live");
    assert_eq!(body["status"], "alive");
}

#[actix_rt::test]
async fn test_register_and_get_agent() {
    let app = test_app!();

    let (status, body) = post_json!(
        app,
        "/api/agents/register",
        json!({ "agentId": "alice", "wallet": "0xA", "specialties": ["solidity"] }),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["agent"]["name"], "Unknown");
    assert_eq!(body["data"]["agent"]["jobsCompleted"], 0);
    assert_eq!(body["data"]["reputation"]["overall"], 50);
    assert_eq!(body["data"]["reputation"]["totalReviews"], 0);

    let (status, body) = get_json!(app, "/api/agents/alice");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["wallet"], "0xA");
    assert_eq!(body["data"]["specialties"], json!(["solidity"]));

    let (status, body) = get_json!(app, "/api/agents/nobody");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("nobody"));
}

#[actix_rt::test]
async fn test_register_rejects_missing_fields() {
    let app = test_app!();

    let (status, body) = post_json!(app, "/api/agents/register", json!({ "agentId": "alice" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = post_json!(app, "/api/agents/register", json!({ "wallet": "0xA" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/agents/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_rt::test]
async fn test_review_updates_reputation() {
    let app = test_app!();
    register!(app, "alice");

    let (status, body) = post_json!(
        app,
        "/api/agents/alice/reviews",
        json!({
            "reviewerId": "bob",
            "jobId": "job-1",
            "ratings": { "reliability": 100, "quality": 60, "communication": 10 }
        }),
    );
    assert_eq!(status, StatusCode::OK);
    let reputation = &body["data"]["reputation"];
    assert_eq!(reputation["reliability"], 100);
    assert_eq!(reputation["quality"], 60);
    assert_eq!(reputation["communication"], 10);
    assert_eq!(reputation["overall"], 66);
    assert_eq!(reputation["totalReviews"], 1);

    let (status, body) = get_json!(app, "/api/agents/alice/reputation");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["agentId"], "alice");
    assert_eq!(body["data"]["trustScore"], 66);
}

#[actix_rt::test]
async fn test_review_unknown_agent() {
    let app = test_app!();

    let (status, body) = post_json!(
        app,
        "/api/agents/ghost/reviews",
        json!({ "ratings": { "reliability": 90, "quality": 90, "communication": 90 } }),
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = get_json!(app, "/api/agents/ghost/reputation");
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_trust_graph_depths() {
    let app = test_app!();
    for id in ["a", "b", "c"] {
        register!(app, id);
    }
    // a -> b -> c
    review!(app, "b", Some("a"), 80);
    review!(app, "c", Some("b"), 40);

    let (status, body) = get_json!(app, "/api/agents/a/trust-graph");
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["depth"], 1);
    assert_eq!(data["graph"]["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(data["graph"]["edges"], json!([{ "from": "a", "to": "b", "rating": 80 }]));

    let (_, body) = get_json!(app, "/api/agents/a/trust-graph?depth=2");
    let data = &body["data"];
    let nodes: Vec<&str> = data["graph"]["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert_eq!(nodes, vec!["a", "b", "c"]);
    assert_eq!(data["graph"]["edges"].as_array().unwrap().len(), 2);
    // a stays neutral at 50, b and c carry their review scores
    assert_eq!(data["networkTrustScore"], 57);

    let (_, body) = get_json!(app, "/api/agents/a/trust-graph?depth=0");
    assert_eq!(body["data"]["graph"]["nodes"].as_array().unwrap().len(), 1);
    assert!(body["data"]["graph"]["edges"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["networkTrustScore"], 0);

    let (_, body) = get_json!(app, "/api/agents/a/trust-graph?depth=99");
    assert_eq!(body["data"]["depth"], 5);

    let (status, body) = get_json!(app, "/api/agents/nobody/trust-graph");
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["graph"]["nodes"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_trust_graph_rejects_bad_depth() {
    let app = test_app!();
    register!(app, "a");

    let (status, body) = get_json!(app, "/api/agents/a/trust-graph?depth=deep");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[actix_rt::test]
async fn test_skill_verification() {
    let app = test_app!();
    register!(app, "alice");

    let (status, body) = post_json!(
        app,
        "/api/skills/verify",
        json!({ "agentId": "alice", "skill": "solidity", "verifierId": "bob", "proof": "audit" }),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["skill"], "solidity");
    assert_eq!(body["data"]["verifications"], 1);

    post_json!(
        app,
        "/api/skills/verify",
        json!({ "agentId": "alice", "skill": "solidity", "verifierId": "carol" }),
    );

    let (status, body) = get_json!(app, "/api/agents/alice/skills");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["agentId"], "alice");
    assert_eq!(body["data"]["skills"]["solidity"]["verifications"], 2);
    assert_eq!(body["data"]["skills"]["solidity"]["verifiedBy"], json!(["bob", "carol"]));

    let (status, _) = post_json!(app, "/api/skills/verify", json!({ "agentId": "alice" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get_json!(app, "/api/agents/nobody/skills");
    assert_eq!(body["data"]["skills"], json!({}));
}

#[actix_rt::test]
async fn test_search_agents() {
    let app = test_app!();
    for id in ["low", "mid", "high"] {
        register!(app, id);
    }
    review!(app, "low", None, 20);
    review!(app, "high", None, 95);
    post_json!(
        app,
        "/api/skills/verify",
        json!({ "agentId": "mid", "skill": "rust", "verifierId": "high" }),
    );

    let (status, body) = get_json!(app, "/api/agents/search");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 3);
    assert_eq!(body["data"]["agents"][0]["id"], "high");
    assert_eq!(body["data"]["agents"][0]["reputation"]["overall"], 95);

    let (_, body) = get_json!(app, "/api/agents/search?minReputation=50");
    assert_eq!(body["data"]["count"], 2);

    let (_, body) = get_json!(app, "/api/agents/search?skills=rust");
    let agents = body["data"]["agents"].as_array().unwrap();
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0]["id"], "mid");

    let (_, body) = get_json!(app, "/api/agents/search?limit=1");
    assert_eq!(body["data"]["count"], 3);
    assert_eq!(body["data"]["agents"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_leaderboard() {
    let app = test_app!();
    for id in ["a", "b", "c"] {
        register!(app, id);
    }
    post_json!(
        app,
        "/api/agents/a/reviews",
        json!({ "ratings": { "reliability": 100, "quality": 10, "communication": 50 } }),
    );
    post_json!(
        app,
        "/api/agents/b/reviews",
        json!({ "ratings": { "reliability": 10, "quality": 100, "communication": 50 } }),
    );

    let (status, body) = get_json!(app, "/api/leaderboard?category=quality&limit=2");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["category"], "quality");
    let board = body["data"]["leaderboard"].as_array().unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0]["agentId"], "b");
    assert_eq!(board[0]["score"], 100);

    let (_, body) = get_json!(app, "/api/leaderboard?category=karma");
    assert_eq!(body["data"]["category"], "overall");

    // category names are case-sensitive
    let (_, body) = get_json!(app, "/api/leaderboard?category=QUALITY");
    assert_eq!(body["data"]["category"], "overall");
    assert_eq!(body["data"]["leaderboard"].as_array().unwrap().len(), 3);
}

#[actix_rt::test]
async fn test_metrics_endpoint() {
    let app = test_app!();
    register!(app, "alice");

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("agent_registrations_total"));
}
