use httpmock::prelude::*;
use serde_json::{json, Value as JsonValue};

use quran_mcp::infra::config::ApiConfig;
use quran_mcp::infra::mcp::QuranSvc;

fn svc(server: &MockServer) -> QuranSvc {
    let api = ApiConfig {
        base_url: server.base_url(),
        ..ApiConfig::default()
    };
    QuranSvc::from_config(&api).unwrap()
}

fn args(v: JsonValue) -> Option<serde_json::Map<String, JsonValue>> {
    v.as_object().cloned()
}

#[tokio::test]
async fn chapter_by_id_returns_the_chapter_record() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET).path("/chapters/1").query_param("language", "ur");
        then.status(200).json_body(json!({
            "chapter": {"id": 1, "name_simple": "Al-Fatihah", "verses_count": 7}
        }));
    });

    let env = svc(&server)
        .dispatch("chapter_by_id", args(json!({"id": 1, "options": {"language": "ur"}})))
        .await
        .unwrap();
    m.assert();
    assert!(!env.is_error);
    let record: JsonValue = serde_json::from_str(env.as_text()).unwrap();
    assert_eq!(record["verses_count"], 7);
}

#[tokio::test]
async fn verse_by_key_without_options() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET).path("/verses/by_key/1:1");
        then.status(200).json_body(json!({"verse": {"verse_key": "1:1"}}));
    });

    let env = svc(&server)
        .dispatch("verse_by_key", args(json!({"key": "1:1"})))
        .await
        .unwrap();
    m.assert();
    let verse: JsonValue = serde_json::from_str(env.as_text()).unwrap();
    assert_eq!(verse, json!({"verse_key": "1:1"}));
}

#[tokio::test]
async fn out_of_range_juz_is_passed_through_and_fails_as_content() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET).path("/verses/by_juz/31");
        then.status(404).json_body(json!({"status": 404, "error": "Juz not found"}));
    });

    let env = svc(&server)
        .dispatch("verses_by_juz", args(json!({"juz": 31})))
        .await
        .unwrap();
    m.assert_hits(1);
    assert!(env.is_error);
    assert_eq!(env.as_text(), "Error: Juz not found");
}

#[tokio::test]
async fn search_forwards_query_and_paging() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "mercy")
            .query_param("size", "5")
            .query_param("page", "2");
        then.status(200)
            .json_body(json!({"search": {"query": "mercy", "total_results": 0, "results": []}}));
    });

    let env = svc(&server)
        .dispatch(
            "search_quran",
            args(json!({"query": "mercy", "options": {"size": 5, "page": 2}})),
        )
        .await
        .unwrap();
    m.assert();
    let found: JsonValue = serde_json::from_str(env.as_text()).unwrap();
    assert_eq!(found["query"], "mercy");
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_api() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(json!({}));
    });

    let env = svc(&server)
        .dispatch("verses_by_page", args(json!({"page": "seven"})))
        .await
        .unwrap();
    assert!(env.is_error);
    assert!(env.as_text().starts_with("Error: invalid arguments"));
    m.assert_hits(0);
}
