use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

use crate::content;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";
const INDEX_FILE: &str = "index.html";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct HostConfig {
    bind_address: IpAddr,
    port: u16,
    dist_dir: PathBuf,
    static_cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl HostConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let bind_address = non_empty(lookup("BIND_ADDRESS"))
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(DEFAULT_BIND_ADDRESS);
        let dist_dir = non_empty(lookup("SITE_DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_cache_max_age_seconds = parse_u64_with_bounds(
            lookup("STATIC_CACHE_MAX_AGE_SECONDS"),
            DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
            STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            bind_address,
            port,
            dist_dir,
            static_cache_max_age_seconds,
            log_level,
        }
    }

    fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<HostConfig>,
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
    projects: usize,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();

    match content::validate() {
        Ok(()) => log_event(
            &config,
            LogLevel::Info,
            "content_check",
            serde_json::json!({ "ok": true, "projects": content::PROJECTS.len() }),
        ),
        Err(issues) => log_event(
            &config,
            LogLevel::Info,
            "content_check",
            serde_json::json!({
                "ok": false,
                "issues": issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
            }),
        ),
    }

    if !config.dist_dir.join(INDEX_FILE).is_file() {
        log_event(
            &config,
            LogLevel::Info,
            "dist_missing",
            serde_json::json!({
                "dist_dir": config.dist_dir.display().to_string(),
                "hint": "run `trunk build --release` first",
            }),
        );
    }

    let address = config.socket_addr();
    let listener = TcpListener::bind(address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_start",
        serde_json::json!({ "address": listener.local_addr()?.to_string() }),
    );

    let app = router(AppState {
        config: Arc::new(config),
    });
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn router(state: AppState) -> Router {
    let dist_dir = state.config.dist_dir.clone();
    let static_service = ServeDir::new(&dist_dir).fallback(ServeFile::new(dist_dir.join(INDEX_FILE)));

    Router::new()
        .route("/healthz", get(health))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), access_log))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    (
        StatusCode::OK,
        headers,
        Json(HealthPayload {
            ok: true,
            projects: content::PROJECTS.len(),
        }),
    )
}

async fn access_log(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    if !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(
            header::CACHE_CONTROL,
            cache_control(&cache_policy(&path, state.config.static_cache_max_age_seconds)),
        );
    }

    let status = response.status();
    let level = if status.is_server_error() || status == StatusCode::NOT_FOUND {
        LogLevel::Info
    } else {
        LogLevel::Debug
    };
    log_event(
        &state.config,
        level,
        "request",
        serde_json::json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

/// Entry documents must be revalidated so a new deploy is picked up; hashed
/// bundle assets can be cached.
fn cache_policy(path: &str, max_age_seconds: u64) -> String {
    let is_document = Path::new(path)
        .extension()
        .map(|extension| extension.eq_ignore_ascii_case("html"))
        .unwrap_or(true);

    if is_document || max_age_seconds == 0 {
        "no-cache".to_string()
    } else {
        format!("public, max-age={max_age_seconds}")
    }
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<String>, default: LogLevel) -> LogLevel {
    match non_empty(value)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_line(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

fn log_event(config: &HostConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    println!("{}", log_line(level, event, fields));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| values.get(name).cloned()
    }

    fn test_config(dist_dir: PathBuf) -> HostConfig {
        HostConfig {
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            dist_dir,
            static_cache_max_age_seconds: 600,
            log_level: LogLevel::Info,
        }
    }

    async fn spawn_host(dist_dir: PathBuf) -> SocketAddr {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("bind ephemeral port");
        let address = listener.local_addr().expect("local address");
        let app = router(AppState {
            config: Arc::new(test_config(dist_dir)),
        });
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        address
    }

    fn write_dist() -> tempfile::TempDir {
        let dist = tempfile::tempdir().expect("temp dist dir");
        std::fs::write(dist.path().join(INDEX_FILE), "<!doctype html><div id=\"app\"></div>")
            .expect("write index");
        std::fs::write(dist.path().join("folio-abc123.js"), "console.log(1)").expect("write bundle");
        dist
    }

    #[test]
    fn config_defaults_when_env_is_empty() {
        let config = HostConfig::from_lookup(|_| None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.static_cache_max_age_seconds, DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_reads_overrides() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", " 3000 "),
            ("BIND_ADDRESS", "127.0.0.1"),
            ("SITE_DIST_DIR", "public"),
            ("STATIC_CACHE_MAX_AGE_SECONDS", "0"),
            ("LOG_LEVEL", "DEBUG"),
        ]));
        assert_eq!(config.socket_addr(), "127.0.0.1:3000".parse::<SocketAddr>().expect("valid address"));
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.static_cache_max_age_seconds, 0);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn invalid_config_values_fall_back() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", "0"),
            ("BIND_ADDRESS", "localhost"),
            ("SITE_DIST_DIR", "   "),
            ("STATIC_CACHE_MAX_AGE_SECONDS", "999999999999"),
            ("LOG_LEVEL", "verbose"),
        ]));
        assert_eq!(config, HostConfig::from_lookup(|_| None));
    }

    #[test]
    fn documents_are_revalidated_and_assets_cached() {
        assert_eq!(cache_policy("/", 600), "no-cache");
        assert_eq!(cache_policy("/projects", 600), "no-cache");
        assert_eq!(cache_policy("/index.html", 600), "no-cache");
        assert_eq!(cache_policy("/folio-abc123.js", 600), "public, max-age=600");
        assert_eq!(cache_policy("/Consol8-1.png", 0), "no-cache");
    }

    #[test]
    fn request_id_is_echoed_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
        assert_ne!(generated, resolve_request_id(&HeaderMap::new()));
    }

    #[test]
    fn log_line_merges_fields() {
        let line = log_line(LogLevel::Debug, "request", serde_json::json!({ "status": 200 }));
        assert_eq!(line["level"], "debug");
        assert_eq!(line["event"], "request");
        assert_eq!(line["status"], 200);
        assert!(line["ts"].is_u64());
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[tokio::test]
    async fn serves_index_for_unknown_routes() {
        let dist = write_dist();
        let address = spawn_host(dist.path().to_path_buf()).await;

        let response = reqwest::get(format!("http://{address}/projects/consol8"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers().get("cache-control").and_then(|value| value.to_str().ok()),
            Some("no-cache")
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        let body = response.text().await.expect("body");
        assert!(body.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn static_assets_are_cacheable() {
        let dist = write_dist();
        let address = spawn_host(dist.path().to_path_buf()).await;

        let response = reqwest::Client::new()
            .get(format!("http://{address}/folio-abc123.js"))
            .header(REQUEST_ID_HEADER, "trace-7")
            .send()
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers().get("cache-control").and_then(|value| value.to_str().ok()),
            Some("public, max-age=600")
        );
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).and_then(|value| value.to_str().ok()),
            Some("trace-7")
        );
    }

    #[tokio::test]
    async fn health_reports_project_count() {
        let dist = write_dist();
        let address = spawn_host(dist.path().to_path_buf()).await;

        let response = reqwest::get(format!("http://{address}/healthz"))
            .await
            .expect("request succeeds");
        assert_eq!(
            response.headers().get("cache-control").and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        let payload: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(payload["ok"], true);
        assert_eq!(payload["projects"], content::PROJECTS.len());
    }
}
