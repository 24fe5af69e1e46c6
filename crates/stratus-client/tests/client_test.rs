//! End-to-end client tests against a mock config server.

use stratus_client::{ClientConfig, ClientError, ConfigClient, TextFormat};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload(name: &str, sources: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "profiles": ["default"],
        "label": "main",
        "version": "a1b2c3",
        "propertySources": sources
    })
}

fn client(server: &MockServer, applications: Vec<&str>) -> ConfigClient {
    let config = ClientConfig::builder()
        .endpoint(server.uri())
        .applications(applications)
        .retry_delay_ms(10)
        .build()
        .unwrap();
    ConfigClient::new(config).unwrap()
}

#[tokio::test]
async fn test_load_single_application() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/myapp/default/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload(
            "myapp",
            serde_json::json!([
                {"name": "myapp-prod.yml", "source": {"server.port": 80}},
                {"name": "myapp.yml", "source": {"server.port": 8080, "server.host": "localhost"}}
            ]),
        )))
        .mount(&server)
        .await;

    let merged = client(&server, vec!["myapp"]).load().await.unwrap();

    assert_eq!(merged.name(), "myapp");
    assert_eq!(merged.label(), Some("main"));
    assert_eq!(merged.version(), Some("a1b2c3"));
    assert_eq!(merged.get_i64("server.port"), Some(80));
    assert_eq!(merged.get_str("server.host"), Some("localhost"));
}

#[tokio::test]
async fn test_load_last_application_wins() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/base/default/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload(
            "base",
            serde_json::json!([{"name": "base.yml", "source": {"k": "base", "base.only": true}}]),
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/override/default/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload(
            "override",
            serde_json::json!([{"name": "override.yml", "source": {"k": "override"}}]),
        )))
        .mount(&server)
        .await;

    let merged = client(&server, vec!["base", "override"])
        .load()
        .await
        .unwrap();

    assert_eq!(merged.name(), "base,override");
    assert_eq!(merged.get_str("k"), Some("override"));
    assert_eq!(merged.get_bool("base.only"), Some(true));
}

#[tokio::test]
async fn test_one_failing_application_fails_the_load() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/good/default/main"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(payload("good", serde_json::json!([]))),
        )
        .mount(&server)
        .await;
    // No mock for "bad": wiremock answers 404

    let config = ClientConfig::builder()
        .endpoint(server.uri())
        .applications(vec!["good", "bad"])
        .max_retries(0)
        .build()
        .unwrap();

    let err = ConfigClient::new(config).unwrap().load().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_api_key_and_static_headers_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/myapp/default/main"))
        .and(header("X-API-Key", "secret"))
        .and(header("X-Tenant", "acme"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(payload("myapp", serde_json::json!([]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .endpoint(server.uri())
        .application("myapp")
        .header("X-Tenant", "acme")
        .api_key("secret")
        .build()
        .unwrap();

    ConfigClient::new(config).unwrap().load().await.unwrap();
    server.verify().await;
}

#[tokio::test]
async fn test_retry_then_success() {
    let server = MockServer::start().await;

    // First attempt fails, second succeeds
    Mock::given(method("GET"))
        .and(path("/myapp/default/main"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/myapp/default/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload(
            "myapp",
            serde_json::json!([{"name": "myapp.yml", "source": {"ok": true}}]),
        )))
        .mount(&server)
        .await;

    let merged = client(&server, vec!["myapp"]).load().await.unwrap();
    assert_eq!(merged.get_bool("ok"), Some(true));
}

#[tokio::test]
async fn test_zero_retries_means_single_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/myapp/default/main"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .endpoint(server.uri())
        .application("myapp")
        .max_retries(0)
        .build()
        .unwrap();

    let err = ConfigClient::new(config).unwrap().load().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport { .. }));
    assert_eq!(err.status_code(), Some(500));
    server.verify().await;
}

#[tokio::test]
async fn test_exhausted_retries_wraps_last_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/myapp/default/main"))
        .respond_with(ResponseTemplate::new(502))
        .expect(3)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .endpoint(server.uri())
        .application("myapp")
        .max_retries(2)
        .retry_delay_ms(10)
        .exponential_backoff(false)
        .build()
        .unwrap();

    let err = ConfigClient::new(config).unwrap().load().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::ExhaustedRetries { attempts: 3, .. }
    ));
    assert_eq!(err.status_code(), Some(502));
    server.verify().await;
}

#[tokio::test]
async fn test_load_raw_passes_body_through() {
    let server = MockServer::start().await;
    let yaml = "server:\n  port: 8080\n";

    Mock::given(method("GET"))
        .and(path("/myapp-default.yml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(yaml))
        .mount(&server)
        .await;

    let body = client(&server, vec!["myapp"])
        .load_raw(TextFormat::Yaml)
        .await
        .unwrap();

    // Unparsed, byte for byte
    assert_eq!(body, yaml);
}

#[tokio::test]
async fn test_health_up_and_down() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/actuator/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "UP"})))
        .mount(&server)
        .await;

    assert!(client(&server, vec!["myapp"]).health().await);

    let down = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/actuator/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&down)
        .await;

    let config = ClientConfig::builder()
        .endpoint(down.uri())
        .application("myapp")
        .max_retries(0)
        .build()
        .unwrap();

    assert!(!ConfigClient::new(config).unwrap().health().await);
}
