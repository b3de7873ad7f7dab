use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn toktab() -> Command {
    Command::cargo_bin("toktab").expect("binary should build")
}

#[test]
fn help_shows_usage_and_search() {
    toktab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn version_prints_binary_name() {
    toktab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("toktab"));
}

#[test]
fn no_args_shows_help() {
    toktab()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[tokio::test]
async fn model_lookup_renders_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gpt-4o/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "litellm_model_name": "gpt-4o",
            "litellm_provider": "openai",
            "input_cost_per_token": 0.000_002_5,
            "output_cost_per_token": 0.000_01,
            "max_input_tokens": 128_000,
            "supports_vision": true
        })))
        .mount(&server)
        .await;

    toktab()
        .env("TOKTAB_BASE_URL", server.uri())
        .arg("gpt-4o")
        .assert()
        .success()
        .stdout(predicate::str::contains("gpt-4o"))
        .stdout(predicate::str::contains("openai"))
        .stdout(predicate::str::contains("128K"))
        .stdout(predicate::str::contains("Vision"));
}

#[tokio::test]
async fn model_json_prints_raw_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gpt-4o/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "litellm_model_name": "gpt-4o",
            "litellm_provider": "openai"
        })))
        .mount(&server)
        .await;

    let output = toktab()
        .env("TOKTAB_BASE_URL", server.uri())
        .args(["--json", "gpt-4o"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert_eq!(
        parsed.get("litellm_model_name").and_then(|v| v.as_str()),
        Some("gpt-4o")
    );
}

#[tokio::test]
async fn unknown_model_reports_error_and_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    toktab()
        .env("TOKTAB_BASE_URL", server.uri())
        .arg("nonexistent")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[tokio::test]
async fn search_renders_hits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "claude"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "slug": "claude-3-opus",
                "provider": "anthropic",
                "input_cost_per_token": 0.000_015,
                "output_cost_per_token": 0.000_075
            }],
            "query": "claude",
            "count": 1
        })))
        .mount(&server)
        .await;

    toktab()
        .env("TOKTAB_BASE_URL", server.uri())
        .args(["search", "claude"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found 1 model(s) for 'claude'"))
        .stdout(predicate::str::contains("claude-3-opus"))
        .stdout(predicate::str::contains("anthropic"));
}

#[tokio::test]
async fn search_forwards_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [], "query": "test", "count": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    toktab()
        .env("TOKTAB_BASE_URL", server.uri())
        .args(["search", "--limit", "5", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no models found for 'test'"));
}

#[tokio::test]
async fn search_json_prints_raw_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [], "query": "test", "count": 0
        })))
        .mount(&server)
        .await;

    let output = toktab()
        .env("TOKTAB_BASE_URL", server.uri())
        .args(["search", "--json", "test"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert!(parsed.get("results").is_some());
}
