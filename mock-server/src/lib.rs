//! In-memory localization API used by the client's integration tests.
//!
//! Covers projects, API keys, dictionary entries, project languages, the
//! language catalog, rate limits, and the public translate call. Every
//! success body is wrapped as `{success, data, timestamp}`; failures are
//! `{success: false, error}` with a non-2xx status.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

pub const HOURLY_LIMIT: u64 = 100;
pub const DAILY_LIMIT: u64 = 1_000;
pub const MONTHLY_LIMIT: u64 = 10_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub default_language: Option<String>,
    pub languages: Vec<String>,
    pub api_key: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub default_language: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub default_language: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: String,
    pub term: String,
    pub translations: BTreeMap<String, String>,
    pub context: Option<String>,
    pub case_sensitive: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize)]
pub struct CreateEntry {
    pub term: String,
    pub translations: BTreeMap<String, String>,
    pub context: Option<String>,
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Deserialize)]
pub struct UpdateEntry {
    pub term: Option<String>,
    pub translations: Option<BTreeMap<String, String>>,
    pub context: Option<String>,
    pub case_sensitive: Option<bool>,
}

#[derive(Deserialize)]
pub struct AddLanguage {
    pub code: String,
}

#[derive(Deserialize)]
pub struct TranslateBody {
    pub strings: Vec<String>,
    pub target_languages: Vec<String>,
}

#[derive(Deserialize)]
pub struct TranslateParams {
    #[serde(rename = "testMode", default)]
    pub test_mode: bool,
    pub api_key: Option<String>,
}

#[derive(Deserialize)]
pub struct TestModeParams {
    #[serde(rename = "testMode", default)]
    pub test_mode: bool,
}

/// Supported languages: code, English name, native name.
pub const CATALOG: &[(&str, &str, &str)] = &[
    ("de", "German", "Deutsch"),
    ("en", "English", "English"),
    ("es", "Spanish", "Español"),
    ("fr", "French", "Français"),
    ("ja", "Japanese", "日本語"),
    ("pt-BR", "Portuguese (Brazil)", "Português (Brasil)"),
];

#[derive(Default, Clone, Copy)]
struct Usage {
    live: u64,
    test: u64,
}

#[derive(Default)]
pub struct Store {
    /// Keyed by (entity, project id).
    projects: HashMap<(String, String), Project>,
    /// Keyed by project id.
    dictionary: HashMap<String, Vec<DictionaryEntry>>,
    /// Full API keys, keyed by project id. Projects only expose a masked form.
    api_keys: HashMap<String, String>,
    /// Keyed by entity.
    usage: HashMap<String, Usage>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));

    let protected = Router::new()
        .route("/entities/{entity}/projects", get(list_projects).post(create_project))
        .route(
            "/entities/{entity}/projects/{project_id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/entities/{entity}/projects/{project_id}/api-key",
            post(issue_api_key).delete(revoke_api_key),
        )
        .route(
            "/entities/{entity}/projects/{project_id}/dictionary",
            get(list_entries).post(create_entry),
        )
        .route(
            "/entities/{entity}/projects/{project_id}/dictionary/{entry_id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .route(
            "/entities/{entity}/projects/{project_id}/dictionary/search/{language}/{text}",
            get(search_entries),
        )
        .route(
            "/entities/{entity}/projects/{project_id}/languages",
            get(list_languages).post(add_language),
        )
        .route("/ratelimits/{entity}", get(rate_limits))
        .layer(middleware::from_fn(require_bearer));

    let public = Router::new()
        .route("/available-languages", get(available_languages))
        .route("/translate/{org}/{project}", post(translate));

    Router::new()
        .nest("/api/v1", protected.merge(public))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn ok<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({ "success": true, "data": data, "timestamp": now() }))
}

fn created<T: Serialize>(data: T) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, ok(data))
}

/// Failure response: `{success: false, error}`.
pub struct Failure(StatusCode, &'static str);

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "success": false, "error": self.1 }))).into_response()
    }
}

const NOT_FOUND: Failure = Failure(StatusCode::NOT_FOUND, "not found");

async fn require_bearer(request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.is_empty());
    if !authorized {
        debug!(uri = %request.uri(), "rejecting request without bearer token");
        return Failure(StatusCode::UNAUTHORIZED, "unauthorized").into_response();
    }
    next.run(request).await
}

// --- projects ---

async fn list_projects(State(db): State<Db>, Path(entity): Path<String>) -> Json<Value> {
    let store = db.read().await;
    let mut projects: Vec<&Project> = store
        .projects
        .iter()
        .filter(|((owner, _), _)| *owner == entity)
        .map(|(_, p)| p)
        .collect();
    projects.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    ok(projects)
}

async fn create_project(
    State(db): State<Db>,
    Path(entity): Path<String>,
    Json(input): Json<CreateProject>,
) -> Result<(StatusCode, Json<Value>), Failure> {
    if input.name.trim().is_empty() {
        return Err(Failure(StatusCode::BAD_REQUEST, "name is required"));
    }
    let stamp = now();
    let project = Project {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        description: input.description,
        default_language: input.default_language,
        languages: input.languages,
        api_key: None,
        created_at: stamp.clone(),
        updated_at: stamp,
    };
    db.write()
        .await
        .projects
        .insert((entity, project.id.clone()), project.clone());
    Ok(created(project))
}

async fn get_project(
    State(db): State<Db>,
    Path((entity, project_id)): Path<(String, String)>,
) -> Result<Json<Value>, Failure> {
    let store = db.read().await;
    store.projects.get(&(entity, project_id)).map(ok).ok_or(NOT_FOUND)
}

async fn update_project(
    State(db): State<Db>,
    Path((entity, project_id)): Path<(String, String)>,
    Json(input): Json<UpdateProject>,
) -> Result<Json<Value>, Failure> {
    let mut store = db.write().await;
    let project = store.projects.get_mut(&(entity, project_id)).ok_or(NOT_FOUND)?;
    if let Some(name) = input.name {
        project.name = name;
    }
    if let Some(description) = input.description {
        project.description = Some(description);
    }
    if let Some(language) = input.default_language {
        project.default_language = Some(language);
    }
    project.updated_at = now();
    Ok(ok(&*project))
}

async fn delete_project(
    State(db): State<Db>,
    Path((entity, project_id)): Path<(String, String)>,
) -> Result<Json<Value>, Failure> {
    let mut store = db.write().await;
    store.projects.remove(&(entity, project_id.clone())).ok_or(NOT_FOUND)?;
    store.dictionary.remove(&project_id);
    store.api_keys.remove(&project_id);
    Ok(ok(json!({ "deleted": true })))
}

async fn issue_api_key(
    State(db): State<Db>,
    Path((entity, project_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Value>), Failure> {
    let mut store = db.write().await;
    let project = store
        .projects
        .get_mut(&(entity, project_id.clone()))
        .ok_or(NOT_FOUND)?;
    let key = format!("lk_{}", Uuid::new_v4().simple());
    project.api_key = Some(format!("{}****", &key[..7]));
    store.api_keys.insert(project_id, key.clone());
    Ok(created(json!({ "api_key": key, "created_at": now() })))
}

async fn revoke_api_key(
    State(db): State<Db>,
    Path((entity, project_id)): Path<(String, String)>,
) -> Result<Json<Value>, Failure> {
    let mut store = db.write().await;
    let project = store
        .projects
        .get_mut(&(entity, project_id.clone()))
        .ok_or(NOT_FOUND)?;
    project.api_key = None;
    store.api_keys.remove(&project_id).ok_or(NOT_FOUND)?;
    Ok(ok(json!({ "revoked": true })))
}

// --- dictionary ---

fn project_exists(store: &Store, entity: &str, project_id: &str) -> bool {
    store
        .projects
        .contains_key(&(entity.to_string(), project_id.to_string()))
}

async fn list_entries(
    State(db): State<Db>,
    Path((entity, project_id)): Path<(String, String)>,
) -> Result<Json<Value>, Failure> {
    let store = db.read().await;
    if !project_exists(&store, &entity, &project_id) {
        return Err(NOT_FOUND);
    }
    let entries = store.dictionary.get(&project_id).cloned().unwrap_or_default();
    Ok(ok(entries))
}

async fn create_entry(
    State(db): State<Db>,
    Path((entity, project_id)): Path<(String, String)>,
    Json(input): Json<CreateEntry>,
) -> Result<(StatusCode, Json<Value>), Failure> {
    let mut store = db.write().await;
    if !project_exists(&store, &entity, &project_id) {
        return Err(NOT_FOUND);
    }
    let stamp = now();
    let entry = DictionaryEntry {
        id: Uuid::new_v4().to_string(),
        term: input.term,
        translations: input.translations,
        context: input.context,
        case_sensitive: input.case_sensitive,
        created_at: stamp.clone(),
        updated_at: stamp,
    };
    store.dictionary.entry(project_id).or_default().push(entry.clone());
    Ok(created(entry))
}

async fn get_entry(
    State(db): State<Db>,
    Path((entity, project_id, entry_id)): Path<(String, String, String)>,
) -> Result<Json<Value>, Failure> {
    let store = db.read().await;
    if !project_exists(&store, &entity, &project_id) {
        return Err(NOT_FOUND);
    }
    store
        .dictionary
        .get(&project_id)
        .and_then(|entries| entries.iter().find(|e| e.id == entry_id))
        .map(ok)
        .ok_or(NOT_FOUND)
}

async fn update_entry(
    State(db): State<Db>,
    Path((entity, project_id, entry_id)): Path<(String, String, String)>,
    Json(input): Json<UpdateEntry>,
) -> Result<Json<Value>, Failure> {
    let mut store = db.write().await;
    if !project_exists(&store, &entity, &project_id) {
        return Err(NOT_FOUND);
    }
    let entry = store
        .dictionary
        .get_mut(&project_id)
        .and_then(|entries| entries.iter_mut().find(|e| e.id == entry_id))
        .ok_or(NOT_FOUND)?;
    if let Some(term) = input.term {
        entry.term = term;
    }
    if let Some(translations) = input.translations {
        entry.translations = translations;
    }
    if let Some(context) = input.context {
        entry.context = Some(context);
    }
    if let Some(case_sensitive) = input.case_sensitive {
        entry.case_sensitive = case_sensitive;
    }
    entry.updated_at = now();
    Ok(ok(&*entry))
}

async fn delete_entry(
    State(db): State<Db>,
    Path((entity, project_id, entry_id)): Path<(String, String, String)>,
) -> Result<Json<Value>, Failure> {
    let mut store = db.write().await;
    if !project_exists(&store, &entity, &project_id) {
        return Err(NOT_FOUND);
    }
    let entries = store.dictionary.get_mut(&project_id).ok_or(NOT_FOUND)?;
    let index = entries.iter().position(|e| e.id == entry_id).ok_or(NOT_FOUND)?;
    Ok(ok(entries.remove(index)))
}

async fn search_entries(
    State(db): State<Db>,
    Path((entity, project_id, language, text)): Path<(String, String, String, String)>,
) -> Result<Json<Value>, Failure> {
    let store = db.read().await;
    if !project_exists(&store, &entity, &project_id) {
        return Err(NOT_FOUND);
    }
    let needle = text.to_lowercase();
    let matches: Vec<&DictionaryEntry> = store
        .dictionary
        .get(&project_id)
        .map(|entries| {
            entries
                .iter()
                .filter(|e| {
                    e.term.to_lowercase().contains(&needle)
                        || e.translations
                            .get(&language)
                            .is_some_and(|t| t.to_lowercase().contains(&needle))
                })
                .collect()
        })
        .unwrap_or_default();
    Ok(ok(matches))
}

// --- languages ---

fn catalog_entry(code: &str) -> Option<Value> {
    CATALOG
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(code, name, native)| json!({ "code": code, "name": name, "native_name": native }))
}

async fn available_languages() -> Json<Value> {
    let languages: Vec<Value> = CATALOG.iter().filter_map(|(code, _, _)| catalog_entry(code)).collect();
    ok(languages)
}

fn project_languages(project: &Project) -> Vec<Value> {
    project.languages.iter().filter_map(|c| catalog_entry(c)).collect()
}

async fn list_languages(
    State(db): State<Db>,
    Path((entity, project_id)): Path<(String, String)>,
) -> Result<Json<Value>, Failure> {
    let store = db.read().await;
    let project = store.projects.get(&(entity, project_id)).ok_or(NOT_FOUND)?;
    Ok(ok(project_languages(project)))
}

async fn add_language(
    State(db): State<Db>,
    Path((entity, project_id)): Path<(String, String)>,
    Json(input): Json<AddLanguage>,
) -> Result<(StatusCode, Json<Value>), Failure> {
    if catalog_entry(&input.code).is_none() {
        return Err(Failure(StatusCode::BAD_REQUEST, "unsupported language"));
    }
    let mut store = db.write().await;
    let project = store.projects.get_mut(&(entity, project_id)).ok_or(NOT_FOUND)?;
    if !project.languages.contains(&input.code) {
        project.languages.push(input.code);
    }
    Ok(created(project_languages(project)))
}

// --- rate limits ---

fn window(limit: u64, used: u64) -> Value {
    json!({ "limit": limit, "used": used, "remaining": limit.saturating_sub(used) })
}

async fn rate_limits(
    State(db): State<Db>,
    Path(entity): Path<String>,
    Query(params): Query<TestModeParams>,
) -> Json<Value> {
    let usage = db.read().await.usage.get(&entity).copied().unwrap_or_default();
    let used = if params.test_mode { usage.test } else { usage.live };
    ok(json!({
        "tier": "free",
        "hour": window(HOURLY_LIMIT, used),
        "day": window(DAILY_LIMIT, used),
        "month": window(MONTHLY_LIMIT, used),
    }))
}

// --- translate ---

async fn translate(
    State(db): State<Db>,
    Path((org, project_name)): Path<(String, String)>,
    Query(params): Query<TranslateParams>,
    Json(input): Json<TranslateBody>,
) -> Result<Json<Value>, Failure> {
    let mut store = db.write().await;
    let project = store
        .projects
        .iter()
        .find(|((owner, _), p)| *owner == org && p.name == project_name)
        .map(|(_, p)| p.clone())
        .ok_or(NOT_FOUND)?;

    if let Some(key) = params.api_key.as_deref() {
        if store.api_keys.get(&project.id).map(String::as_str) != Some(key) {
            return Err(Failure(StatusCode::UNAUTHORIZED, "invalid api key"));
        }
    }

    let entries = store.dictionary.get(&project.id).cloned().unwrap_or_default();
    let mut translations = BTreeMap::new();
    for language in &input.target_languages {
        let rendered: Vec<String> = input
            .strings
            .iter()
            .map(|s| {
                entries
                    .iter()
                    .find(|e| e.term == *s)
                    .and_then(|e| e.translations.get(language).cloned())
                    .unwrap_or_else(|| format!("[{language}] {s}"))
            })
            .collect();
        translations.insert(language.clone(), rendered);
    }

    let characters: usize = input.strings.iter().map(|s| s.chars().count()).sum();
    let usage = store.usage.entry(org).or_default();
    if params.test_mode {
        usage.test += 1;
    } else {
        usage.live += 1;
    }

    Ok(ok(json!({
        "translations": translations,
        "usage": { "characters": characters * input.target_languages.len(), "tokens": 0 },
    })))
}
