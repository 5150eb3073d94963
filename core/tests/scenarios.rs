//! End-to-end client behavior against a recording substitute transport.
//!
//! Every test checks both sides of the exchange: the request the client
//! produced and the value or error it derived from the canned response.

mod common;

use std::collections::BTreeMap;
use std::sync::Arc;

use common::{client, RecordingTransport, BASE_URL};
use localize_core::{
    AnalyticsQuery, ApiError, AuthenticatedTransport, CreateDictionaryEntryRequest, CreateProjectRequest, ExportFormat,
    HistoryPeriod, HttpMethod, HttpRequest, HttpResponse, LocalizeClient, StaticToken, TranslateOptions,
    TranslateRequest, Transport, UpdateProjectRequest, UpdateSettingsRequest,
};
use serde_json::{json, Value};

fn body_of(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request has no body")).unwrap()
}

// ---------------------------------------------------------------------------
// Scenario A: list projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_projects_unwraps_envelope() {
    let transport = RecordingTransport::new().ok(r#"{"data":[{"id":"1"}]}"#).shared();

    let projects = client(&transport).get_projects("acme").await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, "1");
    assert!(projects[0].name.is_empty());
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, format!("{BASE_URL}/api/v1/entities/acme/projects"));
    assert!(request.body.is_none());
    assert!(request.authenticated);
}

// ---------------------------------------------------------------------------
// Scenario B: failed delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_project_failure_is_typed() {
    let transport = RecordingTransport::new().respond(404, "Not Found", "").shared();

    let err = client(&transport).delete_project("acme", "p1").await.unwrap_err();

    assert!(err.to_string().contains("Not Found"));
    assert!(matches!(err, ApiError::Api { status: 404, .. }));
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.url, format!("{BASE_URL}/api/v1/entities/acme/projects/p1"));
}

#[tokio::test]
async fn every_delete_uses_the_same_error_shape() {
    let transport = RecordingTransport::new()
        .respond(409, "Conflict", r#"{"success":false,"error":"in use"}"#)
        .shared();
    let c = client(&transport);

    let errors = vec![
        c.delete_project("acme", "p1").await.unwrap_err(),
        c.revoke_project_api_key("acme", "p1").await.unwrap_err(),
        c.delete_dictionary_entry("acme", "p1", "d1").await.unwrap_err(),
        c.delete_endpoint("acme", "p1", "e1").await.unwrap_err(),
        c.delete_glossary_entry("acme", "p1", "g1").await.unwrap_err(),
    ];

    for err in errors {
        assert_eq!(err.to_string(), "API request failed: Conflict");
        assert_eq!(err.status_code(), Some(409));
        assert_eq!(err.details().unwrap()["error"], "in use");
    }
}

// ---------------------------------------------------------------------------
// Scenario C: public translate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn translate_is_public_and_sends_json_body() {
    let transport = RecordingTransport::new()
        .ok(r#"{"success":true,"data":{"translations":{"es":["Hola"]}}}"#)
        .shared();

    let response = client(&transport)
        .translate("acme", "proj", &TranslateRequest::new(["Hi"], ["es"]))
        .await
        .unwrap();

    assert_eq!(response.translations["es"], vec!["Hola".to_string()]);
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, format!("{BASE_URL}/api/v1/translate/acme/proj"));
    assert!(request.header("Authorization").is_none());
    assert!(!request.authenticated);
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(body_of(&request), json!({"strings": ["Hi"], "target_languages": ["es"]}));
}

#[tokio::test]
async fn translate_skips_credentials_even_behind_authenticated_transport() {
    let transport = RecordingTransport::new()
        .ok(r#"{"data":{"translations":{}}}"#)
        .shared();
    let authed = AuthenticatedTransport::with_shared_provider(
        SharedSpy(transport.clone()),
        Arc::new(StaticToken::none()),
    );
    let c = LocalizeClient::new(BASE_URL, authed);

    c.translate("acme", "proj", &TranslateRequest::new(["Hi"], ["es"]))
        .await
        .unwrap();

    assert_eq!(transport.calls(), 1);
    assert!(transport.last_request().header("Authorization").is_none());
}

#[tokio::test]
async fn translate_options_add_endpoint_and_query() {
    let transport = RecordingTransport::new()
        .ok(r#"{"data":{"translations":{}}}"#)
        .shared();
    let options = TranslateOptions {
        endpoint: Some("checkout".to_string()),
        api_key: Some("lk_123".to_string()),
        test_mode: true,
    };

    client(&transport)
        .translate_with("acme", "proj", &TranslateRequest::new(["Hi"], ["es"]), &options)
        .await
        .unwrap();

    assert_eq!(
        transport.last_request().url,
        format!("{BASE_URL}/api/v1/translate/acme/proj/checkout?testMode=true&api_key=lk_123")
    );
}

#[tokio::test]
async fn translate_without_organization_sends_nothing() {
    let transport = RecordingTransport::new()
        .ok(r#"{"data":{"translations":{}}}"#)
        .shared();
    let c = client(&transport);

    let err = c
        .translate("/", "proj", &TranslateRequest::new(["Hi"], ["es"]))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Config(_)));
    assert_eq!(transport.calls(), 0);
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Forwards to a shared `RecordingTransport` so the decorator can own it.
struct SharedSpy(Arc<RecordingTransport>);

#[async_trait::async_trait]
impl Transport for SharedSpy {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.0.send(request).await
    }
}

#[tokio::test]
async fn missing_token_fails_before_any_transport_call() {
    let transport = RecordingTransport::new().ok(r#"{"data":[]}"#).shared();
    let c = LocalizeClient::new(BASE_URL, AuthenticatedTransport::new(SharedSpy(transport.clone()), StaticToken::none()));

    let err = c.get_projects("acme").await.unwrap_err();

    assert!(matches!(err, ApiError::Authentication(_)));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn token_is_attached_as_bearer_header() {
    let transport = RecordingTransport::new().ok(r#"{"data":[]}"#).shared();
    let c = LocalizeClient::new(BASE_URL, AuthenticatedTransport::new(SharedSpy(transport.clone()), StaticToken::new("tok")));

    c.get_projects("acme").await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.header("Authorization"), Some("Bearer tok"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn available_languages_needs_no_token() {
    let transport = RecordingTransport::new()
        .ok(r#"{"data":[{"code":"es","name":"Spanish"}]}"#)
        .shared();
    let c = LocalizeClient::new(BASE_URL, AuthenticatedTransport::new(SharedSpy(transport.clone()), StaticToken::none()));

    let languages = c.get_available_languages().await.unwrap();

    assert_eq!(languages[0].code, "es");
    assert_eq!(transport.last_request().url, format!("{BASE_URL}/api/v1/available-languages"));
}

// ---------------------------------------------------------------------------
// Normalization through the client
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unwrapped_response_is_still_usable() {
    let transport = RecordingTransport::new().ok(r#"{"id":"1","name":"Website"}"#).shared();

    let project = client(&transport).get_project("acme", "1").await.unwrap();

    assert_eq!(project.name, "Website");
}

#[tokio::test]
async fn payload_of_wrong_shape_is_a_deserialization_error() {
    let transport = RecordingTransport::new().ok(r#"{"data":{"unexpected":true}}"#).shared();

    let err = client(&transport).get_projects("acme").await.unwrap_err();

    assert!(matches!(err, ApiError::Deserialization(_)));
}

#[tokio::test]
async fn transport_failure_propagates_unchanged() {
    struct Unreachable;

    #[async_trait::async_trait]
    impl Transport for Unreachable {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    let err = LocalizeClient::new(BASE_URL, Unreachable).get_projects("acme").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn read_only_calls_are_idempotent() {
    let transport = RecordingTransport::new()
        .ok(r#"{"data":[{"id":"1","name":"Website"}]}"#)
        .shared();
    let c = client(&transport);

    let first = c.get_projects("acme").await.unwrap();
    let second = c.get_projects("acme").await.unwrap();

    assert_eq!(first, second);
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

// ---------------------------------------------------------------------------
// Request shapes per family
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_crud_requests() {
    let project = r#"{"data":{"id":"p1","name":"Website"}}"#;
    let transport = RecordingTransport::new().ok(project).shared();
    let c = client(&transport);

    c.create_project(
        "acme",
        &CreateProjectRequest {
            name: "Website".to_string(),
            description: None,
            default_language: Some("en".to_string()),
            languages: vec!["es".to_string()],
        },
    )
    .await
    .unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(body_of(&request), json!({"name": "Website", "default_language": "en", "languages": ["es"]}));

    c.update_project(
        "acme",
        "p1",
        &UpdateProjectRequest {
            name: Some("Site".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.url, format!("{BASE_URL}/api/v1/entities/acme/projects/p1"));
    assert_eq!(body_of(&request), json!({"name": "Site"}));
}

#[tokio::test]
async fn api_key_issue_and_revoke_requests() {
    let transport = RecordingTransport::new()
        .respond(201, "Created", r#"{"data":{"api_key":"lk_abc"}}"#)
        .ok(r#"{"data":{"revoked":true}}"#)
        .shared();
    let c = client(&transport);

    let key = c.create_project_api_key("acme", "p1").await.unwrap();
    c.revoke_project_api_key("acme", "p1").await.unwrap();

    assert_eq!(key.api_key, "lk_abc");
    let requests = transport.requests();
    let url = format!("{BASE_URL}/api/v1/entities/acme/projects/p1/api-key");
    assert_eq!((requests[0].method, requests[0].url.as_str()), (HttpMethod::Post, url.as_str()));
    assert_eq!((requests[1].method, requests[1].url.as_str()), (HttpMethod::Delete, url.as_str()));
}

#[tokio::test]
async fn dictionary_delete_returns_the_removed_entry() {
    let transport = RecordingTransport::new()
        .ok(r#"{"data":{"id":"d1","term":"Sign in","translations":{"es":"Iniciar sesión"}}}"#)
        .shared();

    let entry = client(&transport)
        .delete_dictionary_entry("acme", "p1", "d1")
        .await
        .unwrap();

    assert_eq!(entry.id, "d1");
    assert_eq!(entry.translations["es"], "Iniciar sesión");
}

#[tokio::test]
async fn dictionary_search_encodes_free_text() {
    let transport = RecordingTransport::new().ok(r#"{"data":[]}"#).shared();

    client(&transport)
        .search_dictionary("acme", "p1", "pt-BR", "sign in/out?")
        .await
        .unwrap();

    assert_eq!(
        transport.last_request().url,
        format!("{BASE_URL}/api/v1/entities/acme/projects/p1/dictionary/search/pt-BR/sign%20in%2Fout%3F")
    );
}

#[tokio::test]
async fn dictionary_create_sends_translations() {
    let transport = RecordingTransport::new()
        .respond(201, "Created", r#"{"data":{"id":"d1","term":"Cart","translations":{"es":"Carrito"}}}"#)
        .shared();
    let mut translations = BTreeMap::new();
    translations.insert("es".to_string(), "Carrito".to_string());

    client(&transport)
        .create_dictionary_entry(
            "acme",
            "p1",
            &CreateDictionaryEntryRequest {
                term: "Cart".to_string(),
                translations,
                context: None,
                case_sensitive: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(body_of(&transport.last_request()), json!({"term": "Cart", "translations": {"es": "Carrito"}}));
}

#[tokio::test]
async fn endpoint_delete_returns_the_removed_endpoint() {
    let transport = RecordingTransport::new()
        .ok(r#"{"data":{"id":"e1","name":"checkout"}}"#)
        .shared();

    let endpoint = client(&transport).delete_endpoint("acme", "p1", "e1").await.unwrap();

    assert_eq!(endpoint.name, "checkout");
    assert!(endpoint.enabled);
    assert_eq!(
        transport.last_request().url,
        format!("{BASE_URL}/api/v1/entities/acme/projects/p1/endpoints/e1")
    );
}

#[tokio::test]
async fn glossary_export_returns_raw_text() {
    let csv = "source_term,es\nhello,hola\n";
    let transport = RecordingTransport::new().ok(csv).shared();

    let exported = client(&transport)
        .export_glossary("acme", "p1", ExportFormat::Csv)
        .await
        .unwrap();

    assert_eq!(exported, csv);
    assert_eq!(
        transport.last_request().url,
        format!("{BASE_URL}/api/v1/entities/acme/projects/p1/glossaries/export?format=csv")
    );
}

#[tokio::test]
async fn glossary_export_json_is_not_unwrapped() {
    let body = r#"{"data":[{"source_term":"hello"}]}"#;
    let transport = RecordingTransport::new().ok(body).shared();

    let exported = client(&transport)
        .export_glossary("acme", "p1", ExportFormat::Json)
        .await
        .unwrap();

    assert_eq!(exported, body);
}

#[tokio::test]
async fn settings_paths_for_both_deployments() {
    let transport = RecordingTransport::new()
        .ok(r#"{"data":{"default_target_languages":["es"]}}"#)
        .shared();
    let c = client(&transport);
    let update = UpdateSettingsRequest {
        email_notifications: Some(true),
        ..Default::default()
    };

    c.get_user_settings("u 1").await.unwrap();
    c.update_user_settings("u1", &update).await.unwrap();
    c.get_settings().await.unwrap();
    c.update_settings(&update).await.unwrap();

    let urls: Vec<(HttpMethod, String)> = transport.requests().into_iter().map(|r| (r.method, r.url)).collect();
    assert_eq!(
        urls,
        vec![
            (HttpMethod::Get, format!("{BASE_URL}/api/v1/users/u%201/settings")),
            (HttpMethod::Put, format!("{BASE_URL}/api/v1/users/u1/settings")),
            (HttpMethod::Get, format!("{BASE_URL}/api/v1/settings")),
            (HttpMethod::Put, format!("{BASE_URL}/api/v1/settings")),
        ]
    );
}

#[tokio::test]
async fn analytics_sends_only_present_filters() {
    let transport = RecordingTransport::new().ok(r#"{"data":{"total_requests":3}}"#).shared();
    let query = AnalyticsQuery {
        start_date: Some("2024-01-01".to_string()),
        end_date: Some("2024-01-31".to_string()),
        project_id: None,
    };

    let data = client(&transport).get_analytics("acme", &query).await.unwrap();

    assert_eq!(data.total_requests, 3);
    let url = transport.last_request().url;
    assert!(url.starts_with(&format!("{BASE_URL}/api/v1/entities/acme/analytics?")));
    assert!(url.contains("start_date=2024-01-01"));
    assert!(url.contains("end_date=2024-01-31"));
    assert!(!url.contains("project_id"));
}

#[tokio::test]
async fn rate_limit_test_mode_flag() {
    let status = r#"{"data":{"hour":{"limit":100,"used":1,"remaining":99},
        "day":{"limit":1000,"used":1,"remaining":999},
        "month":{"limit":10000,"used":1,"remaining":9999}}}"#;
    let history = r#"{"data":{"period":"day","points":[{"timestamp":"2024-01-01","count":4}]}}"#;
    let transport = RecordingTransport::new()
        .ok(status)
        .ok(status)
        .ok(history)
        .shared();
    let c = client(&transport);

    c.get_rate_limits("acme", false).await.unwrap();
    c.get_rate_limits("acme", true).await.unwrap();
    let points = c
        .get_rate_limit_history("acme", HistoryPeriod::Day, true)
        .await
        .unwrap();

    assert_eq!(points.points[0].count, 4);
    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE_URL}/api/v1/ratelimits/acme"),
            format!("{BASE_URL}/api/v1/ratelimits/acme?testMode=true"),
            format!("{BASE_URL}/api/v1/ratelimits/acme/history/day?testMode=true"),
        ]
    );
}

#[tokio::test]
async fn subscription_requests() {
    let transport = RecordingTransport::new()
        .ok(r#"{"data":{"plan":"pro","status":"active","portal_url":"https://billing"}}"#)
        .shared();
    let c = client(&transport);

    let subscription = c.get_subscription().await.unwrap();
    c.sync_subscription().await.unwrap();

    assert_eq!(subscription.extra["portal_url"], "https://billing");
    let last = transport.last_request();
    assert_eq!(last.method, HttpMethod::Post);
    assert_eq!(last.url, format!("{BASE_URL}/api/v1/subscription/sync"));
}
