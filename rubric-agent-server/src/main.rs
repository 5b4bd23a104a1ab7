//! HTTP server exposing the grading pipeline.
//!
//! Routes: `GET /api/health`, `POST /api/rubric`. Configure via env (see
//! `RubricConfig::from_env`): OPENAI_API_KEY, OPENAI_MODEL, OPENAI_API_BASE,
//! STEP_BUDGET, CORS_ORIGINS, LISTEN, LOG_FILE. Load .env with dotenv.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rubric_agent::{
    AgentError, ChatOpenAI, Checkpointer, MemorySaver, PipelineLlms, RubricConfig, RubricRunner,
    RubricState, RunnerOptions,
};
use serde::Deserialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span};

/// Shared state for all routes: the compiled pipeline and the project name.
struct AppState {
    runner: Arc<RubricRunner>,
    project: String,
}

/// Body of `POST /api/rubric`.
#[derive(Debug, Deserialize)]
struct RubricRequest {
    teacher_input: String,
    thread_id: String,
}

/// Middleware that logs method and URI at debug, then forwards the request.
async fn log_request(request: Request<Body>, next: Next) -> Response {
    tracing::debug!(method = %request.method(), uri = %request.uri(), "request");
    next.run(request).await
}

/// Load .env from current directory; if not found, try parent (workspace root when run from crate dir).
fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        return;
    }
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(parent) = cwd.parent() {
            let env_path = parent.join(".env");
            if env_path.is_file() {
                let _ = dotenv::from_path(env_path);
            }
        }
    }
}

/// Initializes tracing: always to stdout; if `log_file` is set, also to that file (append, no ANSI).
fn init_tracing(log_file: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::Layer;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info,rubric_agent=debug,rubric_agent_server=debug")
    });

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(filter.clone());

    let registry = tracing_subscriber::registry().with(stdout_layer);

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_filter(filter);
        registry.with(file_layer).init();
        tracing::info!(path = %path, "logging to file");
    } else {
        registry.init();
    }
    Ok(())
}

/// CORS for the configured origins; methods and headers mirror the request so
/// credentials can be allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn build_app(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/rubric", post(generate_rubric))
        .layer(middleware::from_fn(log_request))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                info_span!("request", method = %req.method(), uri = %req.uri())
            }),
        )
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    load_dotenv();
    let config = RubricConfig::from_env()?;

    if config.log_file.is_none() {
        eprintln!("rubric-agent-server: LOG_FILE not set, logs only to stdout.");
    }
    init_tracing(config.log_file.as_deref())?;
    config.warn_if_api_key_missing();

    if config.openai_api_key.is_none() {
        return Err("OPENAI_API_KEY must be set".into());
    }
    info!(
        project = %config.project,
        model = %config.openai_model,
        base_url = %config.openai_api_base,
        step_budget = config.step_budget,
        "LLM and runtime config loaded"
    );

    let llm = Arc::new(ChatOpenAI::from_config(&config));
    let checkpointer: Arc<dyn Checkpointer<RubricState>> = Arc::new(MemorySaver::new());
    let runner = RubricRunner::new(
        PipelineLlms::shared(llm),
        Some(checkpointer),
        RunnerOptions {
            step_budget: config.step_budget,
            verbose: false,
        },
    )?;

    let state = Arc::new(AppState {
        runner: Arc::new(runner),
        project: config.project.clone(),
    });
    let app = build_app(state, &config.cors_origins);

    info!("listening on http://{}", config.listen);
    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({ "health": "ok", "project": state.project }))
}

async fn generate_rubric(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RubricRequest>,
) -> Result<impl IntoResponse, ServerError> {
    tracing::debug!(thread_id = %req.thread_id, "rubric request");
    let thread_id = Some(req.thread_id.as_str()).filter(|t| !t.is_empty());
    let results = state.runner.run(&req.teacher_input, thread_id).await?;
    Ok(Json(serde_json::json!({
        "status": "success",
        "generated_results": results,
    })))
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Agent(#[from] AgentError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, kind) = match &self {
            ServerError::Agent(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.kind().as_str()),
        };
        tracing::error!(kind, error = %self, "rubric run failed");
        (
            status,
            Json(serde_json::json!({ "detail": self.to_string(), "kind": kind })),
        )
            .into_response()
    }
}
